use crate::models::PingResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Ping Endpoint
///
/// Stateless liveness probe. Reads only the system clock, so it is safe for
/// unlimited concurrent invocation.
///
/// ## Response
///
/// - **200 OK**: Service is reachable
///   - Content-Type: `application/json`
///   - Body: [`PingResponse`] containing:
///     - `ok`: Boolean success flag, always `true`
///     - `ts`: ISO 8601 timestamp of request handling time
///
/// ## Example Success Response
/// ```json
/// {
///   "ok": true,
///   "ts": "2023-10-05T14:23:45.678+00:00"
/// }
/// ```
///
/// [`PingResponse`]: crate::models::ping::PingResponse
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "Ping",
    responses(
        (status = 200, description = "Service is reachable", body = PingResponse)
    )
)]
#[get("/ping")]
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(PingResponse::now())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(ping);
}

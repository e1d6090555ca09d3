use actix_web::web;

/// # Ping Endpoint
///
/// Returns a liveness acknowledgement along with the current server timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is reachable
///   - Body: JSON object with `ok` (`true`) and `ts` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "ok": true,
///   "ts": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
pub mod ping;


/// # API Route Configuration
///
/// Sets up the API endpoints under the `/api` base path.
///
/// ## Mounted Services
/// - Ping endpoint (see [`ping::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/ping - Service liveness acknowledgement
/// ```
///
/// [`ping::configure_routes`]: crate::routes::ping::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(ping::configure_routes));
}

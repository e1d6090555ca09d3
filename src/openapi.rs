use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
/// This documentation serves as the source of truth for both API consumers and
/// automated documentation generators.
///
/// # Endpoints
/// - Ping: `GET /api/ping`
///
/// # Schemas
/// - `PingResponse`: Liveness acknowledgement payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::ping::ping),
    components(schemas(crate::models::ping::PingResponse)),
    tags(
        (name = "Ping", description = "Service liveness endpoints")
    ),
    info(
        description = "REST API exposing a liveness ping with the current server time",
        title = "Ping API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

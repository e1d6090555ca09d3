/// # Ping Response Model
///
/// Represents the liveness acknowledgement returned by the ping endpoint,
/// pairing a success flag with the server timestamp at handling time.
///
/// ## Example JSON
/// ```json
/// {
///   "ok": true,
///   "ts": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
pub mod ping;

pub use ping::PingResponse;

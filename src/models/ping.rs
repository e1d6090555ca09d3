use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Ping Response
///
/// Value object returned by the ping endpoint. Constructed fresh for each
/// request and discarded once the response is sent.
///
/// ## Fields
/// - `ok`: Boolean success flag, always `true`
/// - `ts`: ISO 8601 formatted timestamp of request handling time
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct PingResponse {
    pub ok: bool,
    pub ts: String,
}

impl PingResponse {
    pub fn now() -> Self {
        Self {
            ok: true,
            ts: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_ping_response_now() {
        let response = PingResponse::now();

        // Verify success flag
        assert!(response.ok);

        // Verify timestamp is valid ISO 8601 format
        let parsed_time = DateTime::parse_from_rfc3339(&response.ts);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_ping_response_serialization() {
        let response = PingResponse::now();

        let json = serde_json::to_value(&response).expect("Should serialize to JSON");

        assert_eq!(json["ok"], true, "ok should serialize as a JSON boolean");
        let ts = json["ts"].as_str().expect("ts should be a string");
        DateTime::parse_from_rfc3339(ts).expect("ts should be a valid RFC 3339 date");
    }

    #[test]
    fn test_ping_response_timestamps_non_decreasing() {
        let first = PingResponse::now();
        let second = PingResponse::now();

        let t1 = DateTime::parse_from_rfc3339(&first.ts).unwrap();
        let t2 = DateTime::parse_from_rfc3339(&second.ts).unwrap();
        assert!(t2 >= t1, "Later construction should not produce an earlier ts");
    }
}

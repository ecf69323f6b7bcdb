//! Response type definitions
//!
//! Defines the JSON bodies returned by the gateway's own HTTP endpoints.

use serde::{Deserialize, Serialize};

/// Successful resolution response for `GET /api/parse`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Directly fetchable CDN address of the media
    #[serde(rename = "cdnUrl")]
    pub cdn_url: String,

    /// Video title, or the sentinel when the metadata lookup failed
    pub title: String,

    /// Formatted duration, `H:MM:SS` / `M:SS`, or "unknown"
    pub duration: String,

    /// Human-readable quality label of the returned tier
    pub quality: String,

    /// Canonical identifier the URL resolved to
    pub bvid: String,
}

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,

    /// Server version
    pub version: String,
}

impl PingResponse {
    /// Create a new ping response
    pub fn new(server_uptime: u64, version: impl Into<String>) -> Self {
        Self {
            server_uptime,
            version: version.into(),
        }
    }
}

/// Error response for API errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error kind description
    pub error: String,

    /// Upstream or transport detail, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response without detail
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Create a new error response carrying upstream detail
    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_response_serialization() {
        let response = ParseResponse {
            cdn_url: "https://cdn.test/video.flv".to_string(),
            title: "test video".to_string(),
            duration: "1:05".to_string(),
            quality: "1080P HD".to_string(),
            bvid: "BV1xx411c7mD".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cdnUrl"], "https://cdn.test/video.flv");
        assert_eq!(json["title"], "test video");
        assert_eq!(json["duration"], "1:05");
        assert_eq!(json["quality"], "1080P HD");
        assert_eq!(json["bvid"], "BV1xx411c7mD");
    }

    #[test]
    fn test_error_response_omits_absent_message() {
        let json = serde_json::to_string(&ErrorResponse::new("no playable source")).unwrap();
        assert!(!json.contains("message"));

        let json = serde_json::to_string(&ErrorResponse::with_message(
            "upstream info lookup failed",
            "video not found",
        ))
        .unwrap();
        assert!(json.contains("video not found"));
    }

    #[test]
    fn test_ping_response() {
        let response = PingResponse::new(3600, "0.1.0");
        assert_eq!(response.server_uptime, 3600);
        assert_eq!(response.version, "0.1.0");
    }
}

//! Upstream platform wire shapes
//!
//! The platform wraps every JSON response in the same envelope:
//! `{ "code": <int>, "message": <text>, "data": <payload> }` where a code
//! of zero means success. Only the fields the pipeline reads are modeled;
//! everything else in the bodies is ignored by serde.

use serde::{Deserialize, Serialize};

/// Status code the upstream uses for a successful response
pub const UPSTREAM_OK: i64 = 0;

/// Common response envelope for every upstream endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Upstream status code, 0 on success
    pub code: i64,
    /// Human-readable status message
    #[serde(default)]
    pub message: Option<String>,
    /// Endpoint-specific payload, absent on failure
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the upstream reported success
    pub fn is_ok(&self) -> bool {
        self.code == UPSTREAM_OK
    }

    /// The upstream's own message, or a fallback naming the bare code
    pub fn message_or_code(&self) -> String {
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => format!("upstream code {}", self.code),
        }
    }
}

/// One entry of the page-list response; each entry is a playable sub-item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// Target id of the sub-item, consumed by the play-address endpoint
    pub cid: i64,
}

/// Payload of the view-info endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewInfo {
    /// Video title
    #[serde(default)]
    pub title: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u64>,
}

/// Payload of the play-address endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayInfo {
    /// Quality tier the upstream actually answered with; may differ
    /// from the requested hint
    #[serde(default)]
    pub quality: Option<u32>,
    /// Direct-file format list; preferred when non-empty
    #[serde(default)]
    pub durl: Option<Vec<DirectFile>>,
    /// Adaptive-format track lists; fallback when no direct file exists
    #[serde(default)]
    pub dash: Option<DashStreams>,
}

/// One direct-file entry: a complete, immediately fetchable media URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectFile {
    /// CDN address of the media file
    pub url: String,
}

/// Adaptive-format track lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashStreams {
    /// Video tracks; only the first one's base URL is ever used
    #[serde(default)]
    pub video: Vec<DashTrack>,
}

/// One adaptive video track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashTrack {
    /// Base URL of the track. The upstream emits both `baseUrl` and
    /// `base_url` spellings depending on the endpoint variant.
    #[serde(rename = "baseUrl", alias = "base_url")]
    pub base_url: String,
    /// Quality tier of this specific track
    #[serde(default)]
    pub id: Option<u32>,
}

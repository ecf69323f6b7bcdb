//! HTTP request handlers
//!
//! Implementation of the gateway's HTTP endpoints. The handler boundary
//! turns every pipeline failure into a JSON error body; no error here
//! crashes the serving process.

use crate::{
    Error,
    resolver::extract_bvid,
    server::app::AppState,
    types::{ErrorResponse, ParseResponse, PingResponse},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

/// Query parameters for `GET /api/parse`
#[derive(Debug, Deserialize)]
pub struct ParseQuery {
    /// User-supplied video page URL
    pub url: Option<String>,
}

/// Resolve a video URL to a playable CDN address
///
/// GET /api/parse?url=...
pub async fn parse(
    State(state): State<AppState>,
    Query(query): Query<ParseQuery>,
) -> Result<Json<ParseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = match query.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => return Err(error_reply(&Error::MissingParameter)),
    };

    let bvid = match extract_bvid(&url) {
        Some(bvid) => bvid,
        None => {
            tracing::debug!("no identifier in {url:?}");
            return Err(error_reply(&Error::IdentifierNotFound));
        }
    };

    match state.resolver.resolve(&bvid, &url).await {
        Ok(result) => {
            tracing::info!(
                "resolved {bvid} to {} ({})",
                result.cdn_url,
                result.quality_label
            );
            Ok(Json(ParseResponse {
                cdn_url: result.cdn_url,
                title: result.title,
                duration: result.duration_formatted,
                quality: result.quality_label,
                bvid: result.identifier,
            }))
        }
        Err(e) => {
            tracing::error!("resolution for {bvid} failed: {e}");
            Err(error_reply(&e))
        }
    }
}

/// Map a pipeline error to its HTTP status and JSON body
fn error_reply(error: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let body = match error {
        Error::MissingParameter | Error::IdentifierNotFound | Error::NoPlayableSource => {
            ErrorResponse::new(error.to_string())
        }
        Error::UpstreamInfo { message } => {
            ErrorResponse::with_message("upstream info lookup failed", message)
        }
        Error::UpstreamPlayback { message } => {
            ErrorResponse::with_message("upstream playback lookup failed", message)
        }
        Error::Transport(message) => {
            ErrorResponse::with_message("upstream transport failure", message)
        }
        other => ErrorResponse::with_message("internal error", other.to_string()),
    };
    (error.status_code(), Json(body))
}

/// Ping endpoint for health checks
///
/// GET /ping
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    Json(PingResponse::new(uptime, env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Result,
        config::Settings,
        resolver::{Resolver, UpstreamClient},
        types::{ApiEnvelope, DirectFile, PageInfo, PlayInfo, ViewInfo},
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    /// Upstream answering every endpoint successfully with fixed data
    #[derive(Debug)]
    struct StubUpstream;

    #[async_trait]
    impl UpstreamClient for StubUpstream {
        async fn page_list(&self, _bvid: &str) -> Result<ApiEnvelope<Vec<PageInfo>>> {
            Ok(ApiEnvelope {
                code: 0,
                message: None,
                data: Some(vec![PageInfo { cid: 7 }]),
            })
        }

        async fn view_info(&self, _bvid: &str) -> Result<ApiEnvelope<ViewInfo>> {
            Ok(ApiEnvelope {
                code: 0,
                message: None,
                data: Some(ViewInfo {
                    title: Some("stub video".to_string()),
                    duration: Some(3661),
                }),
            })
        }

        async fn play_url(
            &self,
            _bvid: &str,
            _cid: i64,
            _qn: u32,
            _referer: &str,
        ) -> Result<ApiEnvelope<PlayInfo>> {
            Ok(ApiEnvelope {
                code: 0,
                message: None,
                data: Some(PlayInfo {
                    quality: Some(64),
                    durl: Some(vec![DirectFile {
                        url: "https://cdn.test/stub.flv".to_string(),
                    }]),
                    dash: None,
                }),
            })
        }
    }

    fn create_test_state() -> AppState {
        let settings = Settings::default();
        AppState {
            resolver: Resolver::new(Arc::new(StubUpstream), settings.upstream.preferred_quality),
            settings: Arc::new(settings),
            start_time: std::time::Instant::now(),
        }
    }

    #[tokio::test]
    async fn test_parse_handler_success() {
        let state = create_test_state();
        let query = ParseQuery {
            url: Some("https://www.bilibili.com/video/BV1xx411c7mD".to_string()),
        };

        let response = parse(State(state), Query(query)).await.unwrap();
        assert_eq!(response.cdn_url, "https://cdn.test/stub.flv");
        assert_eq!(response.title, "stub video");
        assert_eq!(response.duration, "1:01:01");
        assert_eq!(response.quality, "720P HD");
        assert_eq!(response.bvid, "BV1xx411c7mD");
    }

    #[tokio::test]
    async fn test_parse_handler_missing_url() {
        let state = create_test_state();
        let (status, body) = parse(State(state), Query(ParseQuery { url: None }))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "missing url parameter");
        assert!(body.message.is_none());
    }

    #[tokio::test]
    async fn test_parse_handler_blank_url_is_missing() {
        let state = create_test_state();
        let query = ParseQuery {
            url: Some("   ".to_string()),
        };
        let (status, body) = parse(State(state), Query(query)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "missing url parameter");
    }

    #[tokio::test]
    async fn test_parse_handler_no_identifier() {
        let state = create_test_state();
        let query = ParseQuery {
            url: Some("https://example.test/not-a-video".to_string()),
        };
        let (status, body) = parse(State(state), Query(query)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "no valid identifier found");
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let state = create_test_state();
        let response = ping(State(state)).await;

        assert!(!response.version.is_empty());
        assert!(response.server_uptime < 1);
    }

    #[test]
    fn test_error_reply_shapes() {
        let (status, body) = error_reply(&Error::NoPlayableSource);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.message.is_none());

        let (status, body) = error_reply(&Error::upstream_info("video not found"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message.as_deref(), Some("video not found"));

        let (status, body) = error_reply(&Error::transport("timed out"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.message.as_deref(), Some("timed out"));
    }
}

//! Common test utilities and helpers
//!
//! Shared between the integration test binaries.

#![allow(dead_code)]

use bili_gateway::config::Settings;
use serde_json::json;

/// Settings pointed at a mocked upstream
pub fn test_settings(api_base: &str) -> Settings {
    let mut settings = Settings::default();
    settings.upstream.api_base = api_base.to_string();
    settings.upstream.timeout = std::time::Duration::from_secs(2);
    settings
}

/// Canned successful page-list body with one sub-item
pub fn page_list_body(cid: i64) -> serde_json::Value {
    json!({
        "code": 0,
        "message": "0",
        "data": [{ "cid": cid, "page": 1, "part": "P1" }]
    })
}

/// Canned successful view-info body
pub fn view_info_body(title: &str, duration: u64) -> serde_json::Value {
    json!({
        "code": 0,
        "message": "0",
        "data": { "title": title, "duration": duration, "videos": 1 }
    })
}

/// Canned direct-file play-address body
pub fn play_url_durl_body(url: &str, quality: u32) -> serde_json::Value {
    json!({
        "code": 0,
        "message": "0",
        "data": {
            "quality": quality,
            "durl": [{ "url": url, "order": 1, "size": 1024 }]
        }
    })
}

/// Canned adaptive-format play-address body
pub fn play_url_dash_body(base_url: &str, id: u32) -> serde_json::Value {
    json!({
        "code": 0,
        "message": "0",
        "data": {
            "quality": 116,
            "dash": {
                "video": [{ "baseUrl": base_url, "id": id }],
                "audio": [{ "baseUrl": "https://cdn.test/audio.m4s", "id": 30280 }]
            }
        }
    })
}

/// Canned upstream error body
pub fn upstream_error_body(code: i64, message: &str) -> serde_json::Value {
    json!({ "code": code, "message": message })
}

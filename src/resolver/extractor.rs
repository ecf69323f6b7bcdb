//! Identifier extraction
//!
//! Turns an arbitrary user-supplied string into a canonical BV identifier.
//! Patterns are tried in a fixed priority order, loosest first: the bare
//! `BV...` scan deliberately shadows the structured `bvid=` and `/video/`
//! forms, so any string merely containing an identifier is accepted.
//! Changing this order changes observable behavior on edge-case inputs.

use regex::Regex;
use std::sync::LazyLock;

static BARE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"BV[0-9A-Za-z]+").expect("bare identifier pattern")
});

static QUERY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]bvid=(BV[0-9A-Za-z]+)").expect("query identifier pattern")
});

static PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/video/(BV[0-9A-Za-z]+)").expect("path identifier pattern")
});

/// Extract a BV identifier from a raw URL string.
///
/// Identifier characters are alphanumerics; a match ends at the first
/// `?`, `/`, or end-of-string. Never panics; returns `None` when no
/// identifier shape is present (including for the empty string).
pub fn extract_bvid(url: &str) -> Option<String> {
    if let Some(m) = BARE_ID.find(url) {
        return Some(m.as_str().to_string());
    }
    if let Some(caps) = QUERY_ID.captures(url) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = PATH_ID.captures(url) {
        return Some(caps[1].to_string());
    }
    None
}

//! Response-shaping helpers
//!
//! Pure functions turning raw upstream numbers into presentation text.

/// Marker returned when the duration is zero or was never learned
pub const UNKNOWN_DURATION: &str = "unknown";

/// Format a duration in seconds as `H:MM:SS` or `M:SS`.
///
/// Zero means the metadata lookup failed or omitted the field, so it
/// renders as the unknown marker rather than "0:00".
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return UNKNOWN_DURATION.to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Map a numeric quality tier to its human-readable label.
///
/// Unknown tiers get a generated `<code>P` label so new upstream tiers
/// still render something sensible.
pub fn quality_label(code: u32) -> String {
    match code {
        120 => "4K Ultra".to_string(),
        116 => "1080P60 High Frame Rate".to_string(),
        112 => "1080P+ High Bitrate".to_string(),
        80 => "1080P HD".to_string(),
        74 => "720P60 High Frame Rate".to_string(),
        64 => "720P HD".to_string(),
        32 => "480P Clear".to_string(),
        16 => "360P Smooth".to_string(),
        other => format!("{other}P"),
    }
}

//! Resolution core
//!
//! Everything between a raw user-supplied URL and a playable CDN address:
//! identifier extraction, the three-step upstream pipeline, and the
//! response-shaping helpers (duration formatting, quality labeling).

pub mod extractor;
pub mod format;
pub mod pipeline;
pub mod upstream;

pub use extractor::extract_bvid;
pub use format::{format_duration, quality_label};
pub use pipeline::{PlaybackResult, Resolver};
pub use upstream::{HttpUpstreamClient, UpstreamClient};

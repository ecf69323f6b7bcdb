//! bili-gateway
//!
//! A small HTTP gateway that accepts a bilibili video URL, resolves it
//! through the platform's multi-step web API to a directly fetchable CDN
//! address, and returns structured metadata (title, duration, quality).
//!
//! # Architecture
//!
//! Two stateless components:
//! - **Identifier extractor**: pure pattern matching that turns a
//!   copy-pasted URL into a canonical BV identifier.
//! - **Resolution pipeline**: three strictly sequential upstream lookups
//!   (page list, view info, play address) followed by format selection
//!   with a direct-file → adaptive-track fallback.
//!
//! The upstream platform is reached through the [`resolver::UpstreamClient`]
//! trait so the pipeline can be tested against canned responses.
//!
//! # Usage
//!
//! ```bash
//! bili-gateway --port 8080 --host 0.0.0.0
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bili_gateway::resolver::extract_bvid;
//!
//! let bvid = extract_bvid("https://www.bilibili.com/video/BV1xx411c7mD?p=1");
//! assert_eq!(bvid.as_deref(), Some("BV1xx411c7mD"));
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod server;
pub mod types;

pub use config::Settings;
pub use error::{Error, Result};
pub use resolver::{Resolver, extract_bvid};
pub use types::{ErrorResponse, ParseResponse, PingResponse};

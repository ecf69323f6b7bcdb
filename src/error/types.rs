//! Error type definitions
//!
//! Defines the main error types used throughout the gateway. Every failure
//! mode of the resolution pipeline maps to exactly one variant here, and
//! every variant maps to one HTTP status at the handler boundary.

use axum::http::StatusCode;
use thiserror::Error;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum Error {
    /// Inbound request is missing the `url` query parameter
    #[error("missing url parameter")]
    MissingParameter,

    /// No BV identifier could be extracted from the supplied URL
    #[error("no valid identifier found")]
    IdentifierNotFound,

    /// The page-list lookup reported an upstream error
    #[error("upstream info lookup failed: {message}")]
    UpstreamInfo { message: String },

    /// The play-address lookup reported an upstream error
    #[error("upstream playback lookup failed: {message}")]
    UpstreamPlayback { message: String },

    /// The play-address response contained neither a direct-file list
    /// nor an adaptive video track
    #[error("no playable source in upstream response")]
    NoPlayableSource,

    /// Transport-level fault: network error, timeout, malformed body
    #[error("transport failure: {0}")]
    Transport(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed upstream body: {err}"))
    }
}

impl Error {
    /// Create an upstream info error, carrying the upstream's own message
    pub fn upstream_info(message: impl Into<String>) -> Self {
        Self::UpstreamInfo {
            message: message.into(),
        }
    }

    /// Create an upstream playback error
    pub fn upstream_playback(message: impl Into<String>) -> Self {
        Self::UpstreamPlayback {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code surfaced to the inbound caller for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter | Self::IdentifierNotFound => StatusCode::BAD_REQUEST,
            Self::UpstreamInfo { .. } | Self::UpstreamPlayback { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NoPlayableSource => StatusCode::NOT_FOUND,
            Self::Transport(_) | Self::Config(_) | Self::Io(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the gateway.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Quality tier requested from the play-address endpoint by default.
/// The upstream may silently answer with a different tier; labels are
/// always derived from the response, never from this hint.
pub const DEFAULT_PREFERRED_QUALITY: u32 = 116;

/// Main configuration settings for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Inbound HTTP server configuration
    pub server: ServerSettings,
    /// Upstream platform configuration
    pub upstream: UpstreamSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory served to browsers at the root path
    pub static_dir: PathBuf,
}

/// Upstream platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Base URL of the platform API
    pub api_base: String,
    /// Static referer sent on page-list and view-info calls
    pub referer: String,
    /// Browser-identifying user agent sent on every outbound call
    pub user_agent: String,
    /// Per-call timeout; upstream silence past this bound is a
    /// transport failure
    pub timeout: Duration,
    /// Quality hint (`qn`) sent to the play-address endpoint
    pub preferred_quality: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "::".to_string(),
                port: 8080,
                static_dir: PathBuf::from("static"),
            },
            upstream: UpstreamSettings {
                api_base: "https://api.bilibili.com".to_string(),
                referer: "https://www.bilibili.com".to_string(),
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                    .to_string(),
                timeout: Duration::from_secs(10),
                preferred_quality: DEFAULT_PREFERRED_QUALITY,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                verbose: false,
            },
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| crate::Error::config(format!("Invalid config file {path:?}: {e}")))
    }

    /// Load settings from environment variables on top of defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Overlay environment variables onto these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(host) = std::env::var("BILI_GATEWAY_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("BILI_GATEWAY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| crate::Error::config(format!("Invalid port: {e}")))?;
        }

        if let Ok(api_base) = std::env::var("BILI_GATEWAY_API_BASE") {
            self.upstream.api_base = api_base;
        }

        if let Ok(timeout) = std::env::var("BILI_GATEWAY_UPSTREAM_TIMEOUT") {
            let secs: u64 = timeout
                .parse()
                .map_err(|e| crate::Error::config(format!("Invalid upstream timeout: {e}")))?;
            self.upstream.timeout = Duration::from_secs(secs);
        }

        Ok(self)
    }

    /// Validate the final configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.upstream.api_base.is_empty() {
            return Err(crate::Error::config("upstream api_base must not be empty"));
        }
        url::Url::parse(&self.upstream.api_base)
            .map_err(|e| crate::Error::config(format!("Invalid upstream api_base: {e}")))?;
        if self.upstream.timeout.is_zero() {
            return Err(crate::Error::config("upstream timeout must be non-zero"));
        }
        Ok(())
    }
}

//! Configuration module
//!
//! Handles application configuration from files, environment variables,
//! and command-line arguments.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{LoggingSettings, ServerSettings, Settings, UpstreamSettings};

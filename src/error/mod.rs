//! Error handling module
//!
//! Provides the main error types and utilities for the gateway.

pub mod types;

pub use types::{Error, Result};

//! HTTP server module
//!
//! Provides the axum application and its request handlers.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app, create_app_with_upstream};

//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{
    config::Settings,
    resolver::{HttpUpstreamClient, Resolver, UpstreamClient},
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolution pipeline over the configured upstream
    pub resolver: Resolver,
    /// Application settings
    pub settings: Arc<Settings>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the main Axum application with routes and middleware
pub fn create_app(settings: Settings) -> crate::Result<Router> {
    let upstream = Arc::new(HttpUpstreamClient::new(&settings.upstream)?);
    Ok(create_app_with_upstream(settings, upstream))
}

/// Create the application over an explicit upstream client.
///
/// Integration tests use this to substitute a mocked upstream.
pub fn create_app_with_upstream(settings: Settings, upstream: Arc<dyn UpstreamClient>) -> Router {
    let resolver = Resolver::new(upstream, settings.upstream.preferred_quality);

    let state = AppState {
        resolver,
        settings: Arc::new(settings.clone()),
        start_time: std::time::Instant::now(),
    };

    Router::new()
        .route("/api/parse", get(super::handlers::parse))
        .route("/ping", get(super::handlers::ping))
        .fallback_service(ServeDir::new(&settings.server.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app() {
        let settings = Settings::default();
        let app = create_app(settings);
        assert!(app.is_ok());
    }
}

use crate::handlers::{generate, health_check};
use crate::relay::Relay;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// API routes plus the static browser client as fallback.
pub fn build_router(relay: Arc<Relay>, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(relay)
}

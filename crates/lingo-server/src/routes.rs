//! Router setup with all API routes and middleware.
//!
//! The front end is served from a different origin (or `file://`), so CORS
//! is wide open; there is no authentication by design.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use lingo_core::config::schema::ServerConfig;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/conversation/start", post(handlers::start))
        .route("/api/conversation/topic", post(handlers::topic))
        .route("/api/conversation/message", post(handlers::message))
        .route("/api/conversation/end", post(handlers::end))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until shutdown.
///
/// `shutdown` resolves to trigger graceful shutdown (e.g. Ctrl+C).
pub async fn start_server(
    config: &ServerConfig,
    state: AppState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = config.addr();
    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! HTTP Adapter
//!
//! JSON API over the refresh coordinator:
//! - `POST /api/fetch`: start a background refresh
//! - `GET /api/status`: refresh progress and cache size
//! - `GET /api/analyze`: ranked reversion candidates
//! - `GET /health`: liveness

pub mod api;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::RefreshCoordinator;

pub use api::{AnalysisPayload, AnalyzeQuery};

/// Build the router; the coordinator is the shared handler state
pub fn build_router(coordinator: RefreshCoordinator) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/api/fetch", post(api::fetch_handler))
        .route("/api/status", get(api::status_handler))
        .route("/api/analyze", get(api::analyze_handler))
        .route("/health", get(api::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(coordinator)
}

/// Bind and serve until Ctrl+C
pub async fn serve(coordinator: RefreshCoordinator, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(coordinator);

    tracing::info!("Registering routes:");
    tracing::info!("  POST /api/fetch");
    tracing::info!("  GET  /api/status");
    tracing::info!("  GET  /api/analyze?min_z_score=1.5&top_n=10");
    tracing::info!("  GET  /health");

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Shutdown signal received");
}

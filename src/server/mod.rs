//! HTTP server for the contact endpoint.
//!
//! Exposes `POST /api/contact` (plus `GET /health`) through axum and runs
//! until Ctrl-C.

pub mod handlers;

use crate::metrics::Metrics;
use crate::services::ContactService;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,

    /// Counts submissions rejected before they reach the service
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>, metrics: Metrics) -> Self {
        Self { service, metrics }
    }
}

/// Build the router with tracing and panic recovery applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Serve the router on `listener` until Ctrl-C.
///
/// # Returns
/// An error if the server fails while accepting connections
pub async fn run_server(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to install Ctrl-C handler: {}", e),
    }
}

//! HTTP server for the pack service.
//!
//! Endpoints:
//! - `GET /api?count=N` — draw a randomized pack of cards
//! - `GET /health` — liveness check

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use packrs_core::{CardCatalog, PackFetcher};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handler;

/// Server state shared across handlers.
pub struct AppState {
    /// Batch fetcher over the configured catalog.
    pub fetcher: PackFetcher<Arc<dyn CardCatalog>>,
    /// Pack size used when the request does not specify one.
    pub default_count: usize,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CardCatalog>, default_count: usize) -> Self {
        Self {
            fetcher: PackFetcher::new(catalog),
            default_count,
        }
    }
}

/// Build the HTTP router.
#[must_use]
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(handler::draw_pack))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn run_server(state: Arc<AppState>, addr: &str) -> crate::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Pack service listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

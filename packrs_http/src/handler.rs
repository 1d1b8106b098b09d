use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use packrs_core::PackCard;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::MAX_PACK_SIZE;
use crate::error::{Error, Result};
use crate::server::AppState;

/// Query parameters for `GET /api`.
///
/// `count` arrives as a raw string so malformed values surface as the same
/// 400 response as out-of-range ones, not as a framework rejection.
#[derive(Debug, Deserialize)]
pub struct DrawParams {
    count: Option<String>,
}

/// Draw a randomized pack of cards.
pub async fn draw_pack(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DrawParams>,
) -> Result<Json<Vec<PackCard>>> {
    let count = match params.count.as_deref() {
        None => state.default_count,
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|count| (1..=MAX_PACK_SIZE).contains(count))
            .ok_or(Error::InvalidCount(MAX_PACK_SIZE))?,
    };

    info!("Drawing a pack of {count} cards");
    let cards = state.fetcher.fetch_batch(count).await?;

    Ok(Json(cards))
}

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

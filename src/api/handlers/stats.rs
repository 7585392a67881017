//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// Expired shortcodes are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.shortener.stats(&shortcode).await?;

    Ok(Json(record.into()))
}

//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public shortener routes.
///
/// # Endpoints
///
/// - `POST /shorturls`             - Create a short URL
/// - `GET  /shorturls/{shortcode}` - Click statistics for a shortcode
/// - `GET  /{shortcode}`           - Redirect to the original URL
///
/// A shortcode literally named `shorturls` is created normally but cannot be
/// reached through `GET /shorturls`, which is claimed by the create route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/{shortcode}", get(redirect_handler))
}

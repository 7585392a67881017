//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short URL
//! - `GET  /shorturls/{shortcode}` - Statistics
//! - `GET  /{shortcode}`           - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Event log** - Request and server-error events for the logging collaborator
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{event_log, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and request middleware.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            event_log::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash
/// normalization, so `/shorturls/abc/` and `/shorturls/abc` are the same.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

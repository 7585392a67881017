//! Request-level event reporting to the logging collaborator.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::events::LogLevel;
use crate::state::AppState;

/// Reports every request, and every server error, as a log event.
///
/// **On Request:** emits `INFO "HTTP {method} {path}"` with `meta.ip` set to
/// the peer address when the server was started with connect info.
///
/// **On Response:** for any 5xx status, additionally emits
/// `ERROR "Error on {method} {path}"` with `meta.status`.
///
/// Reporting is fire-and-forget and never alters the response.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{shortcode}", get(redirect_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), event_log::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    state.shortener.report(
        LogLevel::Info,
        format!("HTTP {} {}", method, target),
        json!({ "ip": ip }),
    );

    let response = next.run(req).await;

    if response.status().is_server_error() {
        state.shortener.report(
            LogLevel::Error,
            format!("Error on {} {}", method, target),
            json!({ "status": response.status().as_u16() }),
        );
    }

    response
}

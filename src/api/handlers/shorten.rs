//! Handler for the short URL creation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",   // required, absolute URL
///   "validity": 30,                 // optional minutes, default 30
///   "shortcode": "abc123"           // optional, ^[a-zA-Z0-9]+$
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortLink": "http://localhost:3000/abc123", "expiry": "2026-01-01T00:30:00.000Z" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for a malformed body, URL or shortcode
/// - 409 Conflict if the shortcode already exists
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload?;

    let created = state.shortener.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

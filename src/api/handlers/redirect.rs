//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Non-standard spelling some clients send instead of `Referer`.
const REFERRER: &str = "referrer";

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Click Tracking
///
/// Each successful redirect records one click with the request's
/// `Referer` header (or `Referrer`, if only that spelling is present).
///
/// # Errors
///
/// - 404 Not Found if the shortcode doesn't exist
/// - 410 Gone if the shortcode has expired
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let referrer = referrer_from_headers(&headers);

    let original_url = state.shortener.redirect(&shortcode, referrer).await?;
    let location = location_header(&original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn referrer_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::REFERER)
        .or_else(|| headers.get(REFERRER))
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Uses the stored URL verbatim when it is a valid header value, otherwise
/// its percent-encoded serialization.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "url": original_url }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderName;

    #[test]
    fn test_referer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_static("https://a.com"));

        assert_eq!(
            referrer_from_headers(&headers).as_deref(),
            Some("https://a.com")
        );
    }

    #[test]
    fn test_referrer_spelling_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(REFERRER),
            HeaderValue::from_static("https://b.com"),
        );

        assert_eq!(
            referrer_from_headers(&headers).as_deref(),
            Some("https://b.com")
        );
    }

    #[test]
    fn test_missing_or_empty_referrer() {
        assert!(referrer_from_headers(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_static(""));
        assert!(referrer_from_headers(&headers).is_none());
    }

    #[test]
    fn test_location_header_verbatim() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_header_falls_back_to_serialized_url() {
        let value = location_header("https://example.com/a\nb").unwrap();
        assert_eq!(value, "https://example.com/ab");
    }
}

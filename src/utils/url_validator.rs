//! Link target validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Checks that `raw` is a non-empty absolute URL.
///
/// Any scheme is accepted. The caller keeps the original string; the parsed
/// form is only returned for inspection.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] for empty, relative, or malformed URLs.
pub fn validate_url(raw: &str) -> Result<Url, AppError> {
    if raw.is_empty() {
        return Err(AppError::invalid_input(
            "Invalid url",
            json!({ "reason": "url is required" }),
        ));
    }

    Url::parse(raw).map_err(|e| {
        AppError::invalid_input("Invalid url", json!({ "url": raw, "reason": e.to_string() }))
    })
}

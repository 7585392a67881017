//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::{CreateShortUrl, CreatedShortUrl};
use crate::utils::validity::coerce_minutes;

/// Request to create a short URL.
///
/// ```json
/// { "url": "https://example.com", "validity": 30, "shortcode": "abc123" }
/// ```
///
/// `validity` is accepted as any JSON value and coerced to whole minutes.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub validity: Option<Value>,

    #[serde(default)]
    pub shortcode: Option<String>,
}

impl From<ShortenRequest> for CreateShortUrl {
    fn from(request: ShortenRequest) -> Self {
        Self {
            url: request.url.unwrap_or_default(),
            validity: coerce_minutes(request.validity.as_ref()),
            shortcode: request.shortcode,
        }
    }
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    #[serde(serialize_with = "crate::domain::clock::serialize_iso_millis")]
    pub expiry: DateTime<Utc>,
}

impl From<CreatedShortUrl> for ShortenResponse {
    fn from(created: CreatedShortUrl) -> Self {
        Self {
            short_link: created.short_link,
            expiry: created.expiry,
        }
    }
}

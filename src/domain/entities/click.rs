//! Click event recorded on every successful redirect.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Location reported for every click. No geolocation lookup is performed.
pub const GEO_PLACEHOLDER: &str = "India";

/// A single redirect occurrence.
///
/// Owned exclusively by its parent [`super::UrlRecord`]; the record's click
/// sequence is append-only, so events are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    #[serde(serialize_with = "crate::domain::clock::serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    pub geo: String,
}

impl ClickEvent {
    /// Creates a click event with the placeholder geo value.
    ///
    /// An empty referrer is treated as absent.
    pub fn new(timestamp: DateTime<Utc>, referrer: Option<String>) -> Self {
        Self {
            timestamp,
            referrer: referrer.filter(|r| !r.is_empty()),
            geo: GEO_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_with_referrer() {
        let now = Utc::now();
        let click = ClickEvent::new(now, Some("https://google.com".to_string()));

        assert_eq!(click.timestamp, now);
        assert_eq!(click.referrer.as_deref(), Some("https://google.com"));
        assert_eq!(click.geo, GEO_PLACEHOLDER);
    }

    #[test]
    fn test_empty_referrer_is_absent() {
        let click = ClickEvent::new(Utc::now(), Some(String::new()));
        assert!(click.referrer.is_none());
    }

    #[test]
    fn test_absent_referrer_is_skipped_in_json() {
        let click = ClickEvent::new(Utc::now(), None);
        let json = serde_json::to_value(&click).unwrap();

        assert!(json.get("referrer").is_none());
        assert_eq!(json["geo"], GEO_PLACEHOLDER);
        assert!(json["timestamp"].is_string());
    }
}

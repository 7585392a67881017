//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// Individual click event information.
///
/// `referrer` is omitted from JSON when the client sent none.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    #[serde(serialize_with = "crate::domain::clock::serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    pub geo: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(click: ClickEvent) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            geo: click.geo,
        }
    }
}

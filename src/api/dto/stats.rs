//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::UrlRecord;

/// Statistics for a single shortcode, clicks in chronological order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: usize,
    pub original_url: String,
    #[serde(serialize_with = "crate::domain::clock::serialize_iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "crate::domain::clock::serialize_iso_millis")]
    pub expiry: DateTime<Utc>,
    pub clicks: Vec<ClickInfo>,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            total_clicks: record.total_clicks(),
            original_url: record.original_url,
            created_at: record.created_at,
            expiry: record.expiry,
            clicks: record.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

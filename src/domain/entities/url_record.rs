//! URL record entity: the only stored object.

use chrono::{DateTime, Utc};

use super::ClickEvent;

/// A shortcode mapped to its original URL.
///
/// `created_at` and `expiry` are fixed at creation. The record stops
/// redirecting once `expiry` is reached but stays queryable for stats;
/// nothing ever deletes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub clicks: Vec<ClickEvent>,
}

impl UrlRecord {
    /// Creates a record with an empty click sequence.
    pub fn new(
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expiry: DateTime<Utc>,
    ) -> Self {
        Self {
            shortcode,
            original_url,
            created_at,
            expiry,
            clicks: Vec::new(),
        }
    }

    /// Returns true once `at` has reached the expiry instant.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.expiry
    }

    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}

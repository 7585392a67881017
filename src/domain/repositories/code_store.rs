//! Repository trait for shortcode storage.

use crate::domain::entities::{ClickEvent, UrlRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of [`CodeStore::record_click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was appended; carries the record's original URL.
    Recorded { original_url: String },
    /// The record exists but had expired at the click's timestamp. Nothing was appended.
    Expired { expiry: DateTime<Utc> },
    /// No record exists for the code.
    Missing,
}

/// Associative storage of URL records keyed by shortcode.
///
/// The store has no validation. Uniqueness of
/// shortcodes is a service-level contract: [`CodeStore::set`] overwrites,
/// while [`CodeStore::insert_new`] is the atomic check-and-insert the
/// create path relies on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCodeStore`] - Concurrent in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Returns true iff a record exists for `code`.
    async fn has(&self, code: &str) -> bool;

    /// Inserts or overwrites the record stored at `code`.
    async fn set(&self, code: &str, record: UrlRecord);

    /// Returns a snapshot of the record stored at `code`.
    async fn get(&self, code: &str) -> Option<UrlRecord>;

    /// Inserts `record` under its own shortcode only if that key is free.
    ///
    /// The existence check and the insertion happen as one step with respect
    /// to every other writer of the same key.
    ///
    /// # Errors
    ///
    /// Hands the record back untouched when the key is already occupied.
    async fn insert_new(&self, record: UrlRecord) -> Result<(), UrlRecord>;

    /// Appends `click` to the record at `code` unless the record had expired
    /// at `click.timestamp`.
    ///
    /// The expiry check and the append are one step under the key's lock,
    /// and only the original URL is copied out, so the cost does not grow
    /// with the record's click history. Concurrent clicks on the same record
    /// are serialized; none are lost.
    async fn record_click(&self, code: &str, click: ClickEvent) -> ClickOutcome;

    /// Number of stored records.
    async fn count(&self) -> usize;
}

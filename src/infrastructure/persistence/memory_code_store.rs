//! In-memory implementation of the code store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{ClickEvent, UrlRecord};
use crate::domain::repositories::{ClickOutcome, CodeStore};

/// Concurrent in-memory code store.
///
/// Backed by a [`DashMap`], so writers to the same shortcode serialize on
/// that key's shard while unrelated shortcodes proceed in parallel. Contents
/// live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryCodeStore {
    records: DashMap<String, UrlRecord>,
}

impl InMemoryCodeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn has(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    async fn set(&self, code: &str, record: UrlRecord) {
        self.records.insert(code.to_string(), record);
    }

    async fn get(&self, code: &str) -> Option<UrlRecord> {
        self.records.get(code).map(|entry| entry.value().clone())
    }

    async fn insert_new(&self, record: UrlRecord) -> Result<(), UrlRecord> {
        match self.records.entry(record.shortcode.clone()) {
            Entry::Occupied(_) => Err(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn record_click(&self, code: &str, click: ClickEvent) -> ClickOutcome {
        let Some(mut entry) = self.records.get_mut(code) else {
            return ClickOutcome::Missing;
        };

        if entry.is_expired_at(click.timestamp) {
            return ClickOutcome::Expired {
                expiry: entry.expiry,
            };
        }

        entry.clicks.push(click);
        ClickOutcome::Recorded {
            original_url: entry.original_url.clone(),
        }
    }

    async fn count(&self) -> usize {
        self.records.len()
    }
}

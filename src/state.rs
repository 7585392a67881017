//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::InMemoryCodeStore;

/// State cloned into every request.
///
/// The store behind the service is owned here and nowhere else, so each
/// `AppState` built by [`AppState::new`] starts from an empty store.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<InMemoryCodeStore>>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService<InMemoryCodeStore>>) -> Self {
        Self { shortener }
    }
}

//! # Shortlink Service
//!
//! An in-memory URL shortener with expiring short codes and per-redirect
//! click analytics, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL records, click events, the code store contract and log events
//! - **Application Layer** ([`application`]) - Create, redirect and stats operations
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and event sinks
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Lifecycle
//!
//! A short URL is created once with a validity window (default 30 minutes).
//! Until it expires, every redirect appends a click event. After expiry
//! redirects answer `410 Gone`, while statistics remain available.
//! Nothing is persisted across restarts.
//!
//! ## Quick Start
//!
//! ```bash
//! export HOST_BASE_URL="http://localhost:3000"
//! export LOG_BASE_URL="https://logs.internal"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateShortUrl, CreatedShortUrl, ShortenerService};
    pub use crate::domain::entities::{ClickEvent, UrlRecord};
    pub use crate::domain::events::{EventSink, LogEvent, LogLevel};
    pub use crate::domain::repositories::CodeStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryCodeStore;
    pub use crate::state::AppState;
}

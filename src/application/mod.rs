//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the event sink, and expose a small
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shortcode creation, redirect and statistics

pub mod services;

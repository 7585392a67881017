//! Storage contracts for the domain layer.
//!
//! - [`CodeStore`] - Shortcode-keyed storage of [`crate::domain::entities::UrlRecord`]s
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod code_store;

pub use code_store::{ClickOutcome, CodeStore};

#[cfg(test)]
pub use code_store::MockCodeStore;

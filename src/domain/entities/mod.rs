//! Core domain entities.
//!
//! - [`UrlRecord`] - A shortcode mapped to its original URL, with expiry
//! - [`ClickEvent`] - A single successful redirect, owned by its record
//!
//! Records are created once, read by redirect and stats, and only ever
//! mutated by appending a click event.

pub mod click;
pub mod url_record;

pub use click::{ClickEvent, GEO_PLACEHOLDER};
pub use url_record::UrlRecord;

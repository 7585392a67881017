//! HTTP request handlers for API endpoints.

pub mod redirect;
pub mod shorten;
pub mod stats;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;

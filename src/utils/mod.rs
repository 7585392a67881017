//! Helpers shared by the service and API layers.
//!
//! - [`code_generator`] - Random shortcode generation and custom code validation
//! - [`url_validator`] - Absolute URL check for link targets
//! - [`validity`] - Coercion of loosely typed validity windows to minutes

pub mod code_generator;
pub mod url_validator;
pub mod validity;

//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public camelCase JSON contract.

pub mod clicks;
pub mod shorten;
pub mod stats;

//! Infrastructure layer for storage and outbound integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`event_sink`] - Logging collaborator transports (HTTP and no-op)
//! - [`persistence`] - Code store implementations

pub mod event_sink;
pub mod persistence;

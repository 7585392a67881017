//! HTTP middleware for request processing.
//!
//! Provides local request tracing and request-level event reporting.

pub mod event_log;
pub mod tracing;

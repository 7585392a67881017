//! Structured events sent to the external logging collaborator.
//!
//! The shortener never inspects the outcome of emitting an event: sinks
//! must return immediately and swallow their own failures.

use serde::Serialize;
use serde_json::Value;

/// Severity of a [`LogEvent`], serialized as `INFO`, `WARN` or `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Payload accepted by the logging collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub stack: &'static str,
    pub level: LogLevel,
    pub package: String,
    pub message: String,
    pub meta: Value,
}

impl LogEvent {
    /// Creates a backend event.
    pub fn new(
        level: LogLevel,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Value,
    ) -> Self {
        Self {
            stack: "backend",
            level,
            package: package.into(),
            message: message.into(),
            meta,
        }
    }
}

/// Fire-and-forget destination for [`LogEvent`]s.
///
/// # Implementations
///
/// - [`crate::infrastructure::event_sink::HttpEventSink`] - POSTs to a remote collector
/// - [`crate::infrastructure::event_sink::NullEventSink`] - Discards events
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    /// Dispatches an event without blocking the caller.
    fn emit(&self, event: LogEvent);
}

//! No-op event sink.

use tracing::debug;

use crate::domain::events::{EventSink, LogEvent};

/// An event sink that drops every event.
///
/// Used when `LOG_BASE_URL` is not configured and in tests that do not
/// care about emitted events.
pub struct NullEventSink;

impl NullEventSink {
    /// Creates a new NullEventSink instance.
    pub fn new() -> Self {
        debug!("Using NullEventSink (remote event logging disabled)");
        Self
    }
}

impl Default for NullEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for NullEventSink {
    fn emit(&self, _event: LogEvent) {}
}

//! Destinations for structured log events.
//!
//! Provides two [`crate::domain::events::EventSink`] implementations:
//! - [`HttpEventSink`] - Posts events to a remote log collector with a bounded timeout
//! - [`NullEventSink`] - No-op implementation for tests or when no collector is configured

mod http_event_sink;
mod null_event_sink;

pub use http_event_sink::HttpEventSink;
pub use null_event_sink::NullEventSink;

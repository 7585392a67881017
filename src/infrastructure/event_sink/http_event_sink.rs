//! HTTP transport for the logging collaborator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, trace};
use ureq::Agent;

use crate::domain::events::{EventSink, LogEvent};

/// Posts events as JSON to `{base_url}/log`.
///
/// [`EventSink::emit`] only enqueues into a bounded channel and never waits.
/// A single delivery thread drains the queue, one POST at a time, each bounded
/// by the agent's global timeout. When the queue is full the event is dropped
/// and counted. Delivery failures, non-2xx answers and timeouts are logged at
/// `debug` and otherwise ignored.
pub struct HttpEventSink {
    endpoint: String,
    tx: mpsc::Sender<LogEvent>,
    dropped: AtomicU64,
}

struct Delivery {
    agent: Agent,
    endpoint: String,
    authorization: Option<String>,
}

impl HttpEventSink {
    /// Creates a sink for the collector at `base_url` and starts its
    /// delivery thread.
    ///
    /// `token` may be given with or without its `Bearer ` prefix. An empty
    /// token sends no `Authorization` header. At most `queue_capacity`
    /// events wait for delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if the delivery thread cannot be spawned.
    pub fn new(
        base_url: &str,
        token: &str,
        timeout: Duration,
        queue_capacity: usize,
    ) -> std::io::Result<Self> {
        let endpoint = format!("{}/log", base_url.trim_end_matches('/'));
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        let delivery = Delivery {
            agent,
            endpoint: endpoint.clone(),
            authorization: bearer(token),
        };

        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        thread::Builder::new()
            .name("event-sink".to_string())
            .spawn(move || delivery.run(rx))?;

        Ok(Self {
            endpoint,
            tx,
            dropped: AtomicU64::new(0),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of events discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Delivery {
    /// Runs until every sender is gone.
    fn run(self, mut rx: mpsc::Receiver<LogEvent>) {
        while let Some(event) = rx.blocking_recv() {
            match self.post(&event) {
                Ok(()) => trace!("Delivered log event to {}", self.endpoint),
                Err(e) => debug!("Log event delivery to {} failed: {}", self.endpoint, e),
            }
        }

        trace!("Event delivery thread stopped");
    }

    fn post(&self, event: &LogEvent) -> Result<(), ureq::Error> {
        let mut request = self.agent.post(&self.endpoint);
        if let Some(value) = &self.authorization {
            request = request.header("Authorization", value.as_str());
        }
        request.send_json(event)?;
        Ok(())
    }
}

impl EventSink for HttpEventSink {
    fn emit(&self, event: LogEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                debug!("Event queue full, dropping log event");
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Event delivery thread is gone, dropping log event");
            }
        }
    }
}

/// Builds the `Authorization` header value for `token`.
fn bearer(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else if token.starts_with("Bearer ") {
        Some(token.to_string())
    } else {
        Some(format!("Bearer {}", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::LogLevel;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc as std_mpsc;
    use std::time::Instant;

    fn event() -> LogEvent {
        LogEvent::new(
            LogLevel::Info,
            "url-shortener",
            "Short URL created",
            json!({ "shortcode": "abc123" }),
        )
    }

    #[test]
    fn test_bearer_prefixing() {
        assert_eq!(bearer("secret").as_deref(), Some("Bearer secret"));
        assert_eq!(bearer("Bearer secret").as_deref(), Some("Bearer secret"));
        assert_eq!(bearer(""), None);
        assert_eq!(bearer("   "), None);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let sink = HttpEventSink::new("http://logs.local/", "", Duration::from_secs(2), 8).unwrap();
        assert_eq!(sink.endpoint(), "http://logs.local/log");
    }

    #[test]
    fn test_emit_does_not_block_on_unreachable_collector() {
        // TEST-NET-1, not routable
        let sink = HttpEventSink::new("http://192.0.2.1", "t", Duration::from_secs(2), 8).unwrap();

        let started = Instant::now();
        sink.emit(event());

        assert!(started.elapsed() < Duration::from_millis(200));
    }

    #[test]
    fn test_full_queue_drops_events_without_blocking() {
        // Bound but never accepted: connections sit in the backlog unanswered.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let sink = HttpEventSink::new(
            &format!("http://{}", addr),
            "",
            Duration::from_secs(2),
            2,
        )
        .unwrap();

        let started = Instant::now();
        for _ in 0..10 {
            sink.emit(event());
        }

        assert!(started.elapsed() < Duration::from_millis(200));
        // Two queued, plus at most one already taken by the delivery thread.
        assert!((7..=8).contains(&sink.dropped()), "dropped {}", sink.dropped());

        drop(listener);
    }

    #[test]
    fn test_emit_posts_json_with_bearer_token() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = std_mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            stream
                .set_read_timeout(Some(Duration::from_secs(5)))
                .unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !String::from_utf8_lossy(&received).contains("Short URL created") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => received.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
            tx.send(String::from_utf8_lossy(&received).to_string()).unwrap();
        });

        let sink = HttpEventSink::new(
            &format!("http://{}", addr),
            "secret",
            Duration::from_secs(2),
            8,
        )
        .unwrap();
        sink.emit(event());

        let request = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        assert!(request.starts_with("POST /log"));
        assert!(request.contains("Bearer secret"));
        assert!(request.contains("\"stack\":\"backend\""));
        assert!(request.contains("\"level\":\"INFO\""));
        assert_eq!(sink.dropped(), 0);
    }
}

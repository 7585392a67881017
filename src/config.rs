//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! ```bash
//! export PORT="3000"
//! export HOST_BASE_URL="https://sho.rt"
//! export LOG_BASE_URL="https://logs.internal"
//! export LOG_TOKEN="secret"
//! ```
//!
//! All variables are optional:
//!
//! - `PORT` - Listening port (default: `3000`)
//! - `LISTEN` - Full bind address, overrides `PORT` (default: `0.0.0.0:{PORT}`)
//! - `HOST_BASE_URL` - Prefix of generated short links (default: `http://localhost:{PORT}`)
//! - `LOG_BASE_URL` - Logging collaborator base URL; events are discarded when unset
//! - `LOG_TOKEN` - Bearer token for the logging collaborator
//! - `LOG_TIMEOUT_MS` - Per-event delivery timeout (default: `2000`)
//! - `LOG_QUEUE_CAPACITY` - Events waiting for delivery before new ones are dropped (default: `1024`)
//! - `LOG_PACKAGE` - `package` field of emitted events (default: `url-shortener`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub listen_addr: String,
    /// Public prefix of short links, without trailing slash.
    pub base_url: String,
    /// Logging collaborator base URL. `None` disables remote event logging.
    pub log_base_url: Option<String>,
    pub log_token: String,
    pub log_timeout_ms: u64,
    pub log_queue_capacity: usize,
    pub log_package: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparseable.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
            Err(_) => 3000,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| format!("0.0.0.0:{}", port));

        let base_url = env::var("HOST_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        let log_base_url = env::var("LOG_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string());

        let log_token = env::var("LOG_TOKEN").unwrap_or_default();

        let log_timeout_ms = match env::var("LOG_TIMEOUT_MS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("LOG_TIMEOUT_MS must be an integer, got '{}'", v))?,
            Err(_) => 2000,
        };

        let log_queue_capacity = match env::var("LOG_QUEUE_CAPACITY") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("LOG_QUEUE_CAPACITY must be an integer, got '{}'", v))?,
            Err(_) => 1024,
        };

        let log_package = env::var("LOG_PACKAGE").unwrap_or_else(|_| "url-shortener".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            port,
            listen_addr,
            base_url,
            log_base_url,
            log_token,
            log_timeout_ms,
            log_queue_capacity,
            log_package,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `base_url` or `log_base_url` is not an http(s) URL
    /// - `log_timeout_ms` is outside 1..=60000
    /// - `log_queue_capacity` is outside 1..=100000
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "HOST_BASE_URL must be an http:// or https:// URL, got '{}'",
                self.base_url
            );
        }

        if let Some(ref log_base_url) = self.log_base_url
            && !is_http_url(log_base_url)
        {
            anyhow::bail!(
                "LOG_BASE_URL must be an http:// or https:// URL, got '{}'",
                log_base_url
            );
        }

        if self.log_timeout_ms == 0 || self.log_timeout_ms > 60_000 {
            anyhow::bail!(
                "LOG_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.log_timeout_ms
            );
        }

        if self.log_queue_capacity == 0 || self.log_queue_capacity > 100_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be between 1 and 100000, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns whether events are forwarded to a remote collector.
    pub fn is_event_logging_enabled(&self) -> bool {
        self.log_base_url.is_some()
    }

    pub fn log_timeout(&self) -> Duration {
        Duration::from_millis(self.log_timeout_ms)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short link base: {}", self.base_url);

        if let Some(ref log_base_url) = self.log_base_url {
            tracing::info!(
                "  Event log: {} (token: {}, timeout: {}ms, queue: {})",
                log_base_url,
                mask_token(&self.log_token),
                self.log_timeout_ms,
                self.log_queue_capacity
            );
        } else {
            tracing::info!("  Event log: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

/// Masks a bearer token for logging, keeping only its last four characters.
fn mask_token(token: &str) -> String {
    let token = token.trim().trim_start_matches("Bearer ");
    let chars: Vec<char> = token.chars().collect();

    match chars.len() {
        0 => "none".to_string(),
        1..=4 => "***".to_string(),
        n => format!("***{}", chars[n - 4..].iter().collect::<String>()),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

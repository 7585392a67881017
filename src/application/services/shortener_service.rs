//! Short URL creation, redirect and statistics service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::domain::clock;
use crate::domain::entities::{ClickEvent, UrlRecord};
use crate::domain::events::{EventSink, LogEvent, LogLevel};
use crate::domain::repositories::{ClickOutcome, CodeStore};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use crate::utils::validity::DEFAULT_VALIDITY_MINUTES;

/// Upper bound on random code attempts before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 4096;

/// Input for [`ShortenerService::create`].
#[derive(Debug, Clone, Default)]
pub struct CreateShortUrl {
    pub url: String,
    /// Validity window in whole minutes; `None` means the 30 minute default.
    pub validity: Option<i64>,
    /// Caller-chosen shortcode. Blank values are treated as absent.
    pub shortcode: Option<String>,
}

/// Result of a successful create.
#[derive(Debug, Clone)]
pub struct CreatedShortUrl {
    pub shortcode: String,
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}

/// Service driving the lifecycle of URL records.
///
/// Each operation touches exactly one shortcode. Records are created by
/// [`Self::create`], accumulate clicks through [`Self::redirect`] until they
/// expire, and stay readable through [`Self::stats`] forever.
///
/// Every operation reports to the configured [`EventSink`] without waiting
/// on it; a failing sink never changes an operation's outcome.
pub struct ShortenerService<S: CodeStore> {
    store: Arc<S>,
    events: Arc<dyn EventSink>,
    base_url: String,
    package: String,
}

impl<S: CodeStore> ShortenerService<S> {
    /// Creates a new shortener service.
    ///
    /// `base_url` is the public prefix of short links; trailing slashes are
    /// dropped. `package` names this service in emitted events.
    pub fn new(
        store: Arc<S>,
        events: Arc<dyn EventSink>,
        base_url: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            store,
            events,
            base_url,
            package: package.into(),
        }
    }

    /// Creates a short URL.
    ///
    /// # Validation Order
    ///
    /// 1. `url` must be a non-empty absolute URL
    /// 2. A supplied shortcode (trimmed) must match `^[a-zA-Z0-9]+$`
    /// 3. `created_at + validity` must be representable
    /// 4. A supplied shortcode must not already exist
    ///
    /// Without a supplied shortcode a random 6 character code is generated,
    /// retrying on collision up to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] for a bad URL, shortcode or validity
    /// - [`AppError::Conflict`] if the supplied shortcode is taken
    /// - [`AppError::ExhaustedCodeSpace`] if no free random code was found
    pub async fn create(&self, request: CreateShortUrl) -> Result<CreatedShortUrl, AppError> {
        validate_url(&request.url)?;

        let custom_code = request
            .shortcode
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());

        if let Some(code) = custom_code {
            validate_custom_code(code)?;
        }

        let minutes = request.validity.unwrap_or(DEFAULT_VALIDITY_MINUTES);
        let created_at = clock::now();
        let expiry = expiry_after(created_at, minutes)?;

        let shortcode = match custom_code {
            Some(code) => {
                let record =
                    UrlRecord::new(code.to_string(), request.url.clone(), created_at, expiry);

                if self.store.insert_new(record).await.is_err() {
                    self.emit(
                        LogLevel::Warn,
                        "Shortcode collision",
                        json!({ "shortcode": code }),
                    );
                    return Err(AppError::conflict(
                        "Shortcode already exists",
                        json!({ "shortcode": code }),
                    ));
                }

                code.to_string()
            }
            None => {
                self.insert_with_generated_code(&request.url, created_at, expiry)
                    .await?
            }
        };

        self.emit(
            LogLevel::Info,
            "Short URL created",
            json!({
                "shortcode": shortcode,
                "url": request.url,
                "expiry": clock::to_iso_millis(&expiry),
            }),
        );

        Ok(CreatedShortUrl {
            short_link: self.short_link(&shortcode),
            shortcode,
            expiry,
        })
    }

    /// Resolves a shortcode to its original URL and records the click.
    ///
    /// A click event (now, `referrer`, placeholder geo) is appended only when
    /// the record has not expired.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the shortcode does not exist
    /// - [`AppError::Expired`] if the current time is at or past the expiry
    pub async fn redirect(&self, code: &str, referrer: Option<String>) -> Result<String, AppError> {
        let click = ClickEvent::new(clock::now(), referrer);

        match self.store.record_click(code, click).await {
            ClickOutcome::Recorded { original_url } => {
                self.emit(LogLevel::Info, "Redirect", json!({ "shortcode": code }));
                Ok(original_url)
            }
            ClickOutcome::Expired { expiry } => {
                self.emit(
                    LogLevel::Warn,
                    "Short URL expired",
                    json!({ "shortcode": code }),
                );
                Err(AppError::expired(
                    "Short URL expired",
                    json!({ "shortcode": code, "expiry": clock::to_iso_millis(&expiry) }),
                ))
            }
            ClickOutcome::Missing => Err(not_found(code)),
        }
    }

    /// Returns a snapshot of the record, clicks included.
    ///
    /// Expired records are still returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode does not exist.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .store
            .get(code)
            .await
            .ok_or_else(|| not_found(code))?;

        self.emit(LogLevel::Info, "Stats fetched", json!({ "shortcode": code }));

        Ok(record)
    }

    /// Number of records currently held by the store.
    pub async fn record_count(&self) -> usize {
        self.store.count().await
    }

    /// Builds the public short link for `code`.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Sends a request-level event straight to the sink, tagged with this
    /// service's package name. Unlike operation events it is not mirrored
    /// to local tracing, which already records every request.
    pub fn report(&self, level: LogLevel, message: impl Into<String>, meta: Value) {
        self.events
            .emit(LogEvent::new(level, self.package.as_str(), message, meta));
    }

    fn emit(&self, level: LogLevel, message: &str, meta: Value) {
        match level {
            LogLevel::Info => info!(%meta, "{}", message),
            LogLevel::Warn => warn!(%meta, "{}", message),
            LogLevel::Error => error!(%meta, "{}", message),
        }

        self.report(level, message, meta);
    }

    async fn insert_with_generated_code(
        &self,
        url: &str,
        created_at: DateTime<Utc>,
        expiry: DateTime<Utc>,
    ) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();
            let record = UrlRecord::new(code.clone(), url.to_string(), created_at, expiry);

            if self.store.insert_new(record).await.is_ok() {
                return Ok(code);
            }
        }

        self.emit(
            LogLevel::Error,
            "Shortcode space exhausted",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        );

        Err(AppError::exhausted_code_space(
            "Failed to generate a unique shortcode",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "shortcode": code }))
}

fn expiry_after(created_at: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>, AppError> {
    Duration::try_minutes(minutes)
        .and_then(|window| created_at.checked_add_signed(window))
        .ok_or_else(|| {
            AppError::invalid_input(
                "Invalid validity",
                json!({ "validity": minutes, "reason": "out of range" }),
            )
        })
}

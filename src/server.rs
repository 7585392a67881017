//! HTTP server initialization and runtime setup.
//!
//! Wires the store, event sink and shortener service together and runs the
//! Axum server until Ctrl-C.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::events::EventSink;
use crate::infrastructure::event_sink::{HttpEventSink, NullEventSink};
use crate::infrastructure::persistence::InMemoryCodeStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state for `config`.
///
/// Every call produces a fresh, empty code store.
pub fn build_state(config: &Config) -> AppState {
    let events: Arc<dyn EventSink> = match &config.log_base_url {
        Some(log_base_url) => match HttpEventSink::new(
            log_base_url,
            &config.log_token,
            config.log_timeout(),
            config.log_queue_capacity,
        ) {
            Ok(sink) => {
                tracing::info!("Event logging enabled ({})", sink.endpoint());
                Arc::new(sink)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to start event delivery: {}. Using NullEventSink.",
                    e
                );
                Arc::new(NullEventSink::new())
            }
        },
        None => {
            tracing::info!("Event logging disabled (NullEventSink)");
            Arc::new(NullEventSink::new())
        }
    };

    let store = Arc::new(InMemoryCodeStore::new());
    let shortener = Arc::new(ShortenerService::new(
        store,
        events,
        config.base_url.clone(),
        config.log_package.clone(),
    ));

    AppState::new(shortener)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state.clone());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("URL Shortener is live at {}", config.base_url);
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!(
        "Server stopped ({} short URLs held in memory were discarded)",
        state.shortener.record_count().await
    );

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

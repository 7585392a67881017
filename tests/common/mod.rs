#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::{TestResponse, TestServer};
use serde_json::Value;
use shortlink_service::application::services::ShortenerService;
use shortlink_service::domain::events::{EventSink, LogEvent};
use shortlink_service::infrastructure::persistence::InMemoryCodeStore;
use shortlink_service::routes::router;
use shortlink_service::state::AppState;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;

pub const BASE_URL: &str = "http://sho.rt";

/// Event sink that records everything it receives.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: LogEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn create_test_state() -> (AppState, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let shortener = Arc::new(ShortenerService::new(
        Arc::new(InMemoryCodeStore::new()),
        sink.clone(),
        BASE_URL,
        "url-shortener",
    ));

    (AppState::new(shortener), sink)
}

pub fn create_test_server() -> (TestServer, Arc<RecordingSink>) {
    let (state, sink) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, sink)
}

pub async fn create_short_url(server: &TestServer, body: Value) -> TestResponse {
    server.post("/shorturls").json(&body).await
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

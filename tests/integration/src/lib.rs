//! Integration tests for the Skyport Elasticsearch Service client.
//!
//! The client runs end to end against [`MockHandler`], an in-process
//! transport that records every request and replays canned responses in
//! order. No network is involved.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use skyport_core::{Endpoint, HandlerFuture, HttpHandler, HttpRequest, SdkBody, TransportError};
use skyport_elasticsearch_core::{ClientConfig, ElasticsearchClient};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A canned response.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with a status, headers and body.
    Response {
        /// HTTP status.
        status: u16,
        /// Response headers.
        headers: Vec<(&'static str, String)>,
        /// Response body.
        body: String,
    },
    /// Fail at the transport level.
    Fail(String),
}

impl Reply {
    /// `200` with a JSON body.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::status(200, body.to_string())
    }

    /// A response with no extra headers.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Response {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Add a response header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Response { headers, .. } = &mut self {
            headers.push((name, value.into()));
        }
        self
    }
}

/// Transport that records requests and replays [`Reply`]s in order.
///
/// Once the queue is empty every request gets `200 {}`.
#[derive(Debug, Clone, Default)]
pub struct MockHandler {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHandler {
    /// Create a mock that replays `replies`.
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// The only request received. Panics unless exactly one was sent.
    #[must_use]
    pub fn single_request(&self) -> HttpRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

impl HttpHandler for MockHandler {
    fn handle(&self, request: HttpRequest) -> HandlerFuture {
        tracing::trace!(uri = %request.uri(), "mock received request");
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_else(|| Reply::status(200, "{}"));
        Box::pin(async move {
            match reply {
                Reply::Response {
                    status,
                    headers,
                    body,
                } => {
                    let mut builder = http::Response::builder().status(status);
                    for (name, value) in headers {
                        builder = builder.header(name, value);
                    }
                    builder
                        .body(SdkBody::from(body.into_bytes()))
                        .map_err(|e| TransportError::Other(anyhow::anyhow!(e)))
                }
                Reply::Fail(message) => Err(TransportError::Connect(message)),
            }
        })
    }
}

/// A client that sends everything to `mock` through a local endpoint.
#[must_use]
pub fn client(mock: &MockHandler) -> ElasticsearchClient {
    init_tracing();
    let config = ClientConfig::builder()
        .endpoint(Endpoint::new("localhost").with_protocol("http").with_port(4566))
        .user_agent("skyport-integration/1.0")
        .build()
        .with_http_handler(mock.clone());
    ElasticsearchClient::new(config)
}

/// Generate a unique domain name for a test.
#[must_use]
pub fn test_domain_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string()[..8].to_owned();
    format!("{prefix}-{id}")
}

/// Parse a recorded request body as JSON.
#[must_use]
pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    request
        .body_str()
        .and_then(|b| serde_json::from_str(b).ok())
        .unwrap_or(serde_json::Value::Null)
}

mod test_cross_cluster;
mod test_domain;
mod test_error;
mod test_packages;
mod test_pagination;
mod test_tags;

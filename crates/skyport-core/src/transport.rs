//! The transport boundary.
//!
//! Skyport builds requests and decodes responses but does not open sockets.
//! Callers plug in an [`HttpHandler`] that delivers an [`HttpRequest`] and
//! hands back the response with a possibly still streaming body.

use std::future::Future;
use std::pin::Pin;

use crate::body::SdkBody;
use crate::error::TransportError;
use crate::request::HttpRequest;

/// Future returned by [`HttpHandler::handle`].
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<SdkBody>, TransportError>> + Send>>;

/// Sends requests over the wire.
///
/// Cancellation and timeouts belong to the implementation; dropping the
/// returned future is the only cancellation a caller can perform.
pub trait HttpHandler: Send + Sync + 'static {
    /// Send one request and return its response.
    fn handle(&self, request: HttpRequest) -> HandlerFuture;
}

/// Handler used when no transport was configured. Fails every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredHandler;

impl HttpHandler for NotConfiguredHandler {
    fn handle(&self, request: HttpRequest) -> HandlerFuture {
        tracing::warn!(path = %request.path, "no HTTP handler configured");
        Box::pin(async { Err(TransportError::NotConfigured) })
    }
}

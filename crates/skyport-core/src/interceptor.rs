//! Request/response interceptors.
//!
//! A client assembles its [`InterceptorStack`] once, at build time. The stack
//! is immutable afterwards and shared by reference across calls. Request hooks
//! run in insertion order; response hooks run in reverse.

use std::fmt;
use std::sync::Arc;

use http::{HeaderMap, StatusCode};
use tracing::debug;

use crate::error::BuildError;
use crate::metadata::ResponseMetadata;
use crate::request::HttpRequest;

/// Per-call information handed to every interceptor.
#[derive(Debug, Clone, Copy)]
pub struct InterceptorContext<'a> {
    /// Service name, e.g. `Elasticsearch Service`.
    pub service: &'a str,
    /// Operation name, e.g. `DescribeElasticsearchDomain`.
    pub operation: &'a str,
}

/// A hook around the transport.
pub trait Interceptor: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Inspect or modify the request before it is sent.
    fn modify_request(
        &self,
        _ctx: &InterceptorContext<'_>,
        _request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    /// Observe the response head before the body is read.
    fn read_response(&self, _ctx: &InterceptorContext<'_>, _status: StatusCode, _headers: &HeaderMap) {}
}

/// An ordered, immutable list of interceptors.
#[derive(Debug, Clone, Default)]
pub struct InterceptorStack {
    interceptors: Arc<[Arc<dyn Interceptor>]>,
}

impl InterceptorStack {
    /// Start assembling a stack.
    #[must_use]
    pub fn builder() -> InterceptorStackBuilder {
        InterceptorStackBuilder::default()
    }

    /// Names of the interceptors, in request order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Number of interceptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns `true` if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run every request hook in order, stopping at the first error.
    pub fn apply_request(
        &self,
        ctx: &InterceptorContext<'_>,
        request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        for interceptor in self.interceptors.iter() {
            interceptor.modify_request(ctx, request)?;
        }
        Ok(())
    }

    /// Run every response hook in reverse order.
    pub fn apply_response(&self, ctx: &InterceptorContext<'_>, status: StatusCode, headers: &HeaderMap) {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.read_response(ctx, status, headers);
        }
    }
}

/// Builder for [`InterceptorStack`].
#[derive(Debug, Default)]
pub struct InterceptorStackBuilder {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorStackBuilder {
    /// Append an interceptor.
    #[must_use]
    pub fn with(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append an already shared interceptor.
    #[must_use]
    pub fn with_shared(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Freeze the stack.
    #[must_use]
    pub fn build(self) -> InterceptorStack {
        InterceptorStack {
            interceptors: self.interceptors.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in interceptors
// ---------------------------------------------------------------------------

/// Sets `user-agent` and `x-amz-user-agent`.
#[derive(Debug, Clone)]
pub struct UserAgentInterceptor {
    user_agent: String,
}

impl UserAgentInterceptor {
    /// Use the given user agent string.
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl Interceptor for UserAgentInterceptor {
    fn name(&self) -> &'static str {
        "user-agent"
    }

    fn modify_request(
        &self,
        _ctx: &InterceptorContext<'_>,
        request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        request.set_header("x-amz-user-agent", &self.user_agent)?;
        request.set_header("user-agent", &self.user_agent)
    }
}

/// Sets `host` from the resolved endpoint unless already present.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostHeaderInterceptor;

impl Interceptor for HostHeaderInterceptor {
    fn name(&self) -> &'static str {
        "host-header"
    }

    fn modify_request(
        &self,
        _ctx: &InterceptorContext<'_>,
        request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        if request.header("host").is_some() {
            return Ok(());
        }
        let host = request.authority();
        request.set_header("host", &host)
    }
}

/// Sets `content-length` whenever a body is present, including an empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentLengthInterceptor;

impl Interceptor for ContentLengthInterceptor {
    fn name(&self) -> &'static str {
        "content-length"
    }

    fn modify_request(
        &self,
        _ctx: &InterceptorContext<'_>,
        request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        if request.header("content-length").is_some() {
            return Ok(());
        }
        match request.body.as_ref().map(bytes::Bytes::len) {
            Some(len) => request.set_header("content-length", &len.to_string()),
            None => Ok(()),
        }
    }
}

/// Logs each request and response at `debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl Interceptor for LoggingInterceptor {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn modify_request(
        &self,
        ctx: &InterceptorContext<'_>,
        request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        debug!(
            service = ctx.service,
            operation = ctx.operation,
            method = %request.method,
            path = %request.path_and_query(),
            "sending request"
        );
        Ok(())
    }

    fn read_response(&self, ctx: &InterceptorContext<'_>, status: StatusCode, headers: &HeaderMap) {
        let metadata = ResponseMetadata::from_parts(status, headers);
        debug!(
            service = ctx.service,
            operation = ctx.operation,
            status = metadata.http_status_code,
            request_id = metadata.request_id.as_deref().unwrap_or("-"),
            "received response"
        );
    }
}

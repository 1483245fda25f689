//! Client-specific interceptors and the default stack.

use std::sync::Arc;

use skyport_core::interceptor::{
    ContentLengthInterceptor, HostHeaderInterceptor, LoggingInterceptor, UserAgentInterceptor,
};
use skyport_core::{BuildError, HttpRequest, Interceptor, InterceptorContext, InterceptorStack};

/// Header carrying the per-call invocation id.
pub const INVOCATION_ID_HEADER: &str = "amz-sdk-invocation-id";

/// Stamps every request with a fresh v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvocationIdInterceptor;

impl Interceptor for InvocationIdInterceptor {
    fn name(&self) -> &'static str {
        "invocation-id"
    }

    fn modify_request(
        &self,
        _ctx: &InterceptorContext<'_>,
        request: &mut HttpRequest,
    ) -> Result<(), BuildError> {
        request.set_header(INVOCATION_ID_HEADER, &uuid::Uuid::new_v4().to_string())
    }
}

/// Built-in interceptors followed by `extra`, in request order.
#[must_use]
pub fn default_stack(user_agent: &str, extra: &[Arc<dyn Interceptor>]) -> InterceptorStack {
    extra
        .iter()
        .fold(
            InterceptorStack::builder()
                .with(InvocationIdInterceptor)
                .with(UserAgentInterceptor::new(user_agent))
                .with(HostHeaderInterceptor)
                .with(ContentLengthInterceptor)
                .with(LoggingInterceptor),
            |builder, interceptor| builder.with_shared(Arc::clone(interceptor)),
        )
        .build()
}

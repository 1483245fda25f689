//! Response body type and body draining.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};

use crate::error::TransportError;

/// Boxed error type of streaming bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Body of a response handed back by a transport.
#[derive(Debug, Default)]
pub enum SdkBody {
    /// A fully buffered body.
    Buffered(Full<Bytes>),
    /// A body still being received.
    Streaming(BoxBody<Bytes, BoxError>),
    /// No body at all.
    #[default]
    Empty,
}

impl SdkBody {
    /// Create a body from raw bytes.
    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::Buffered(Full::new(data.into()))
    }

    /// Create an empty body.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Wrap any streaming body.
    pub fn streaming<B>(body: B) -> Self
    where
        B: http_body::Body<Data = Bytes> + Send + Sync + 'static,
        B::Error: Into<BoxError>,
    {
        Self::Streaming(body.map_err(Into::into).boxed())
    }
}

impl From<&'static str> for SdkBody {
    fn from(value: &'static str) -> Self {
        Self::from_bytes(value)
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(value: Vec<u8>) -> Self {
        Self::from_bytes(value)
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Buffered(full) => Pin::new(full)
                .poll_frame(cx)
                .map_err(|never| match never {}),
            Self::Streaming(body) => Pin::new(body).poll_frame(cx),
            Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Buffered(full) => full.is_end_stream(),
            Self::Streaming(body) => body.is_end_stream(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Buffered(full) => full.size_hint(),
            Self::Streaming(body) => body.size_hint(),
            Self::Empty => http_body::SizeHint::with_exact(0),
        }
    }
}

/// Read a response body to the end.
///
/// Takes the response by value, so each body is drained exactly once whether
/// the caller ends up on the success or the error path.
pub async fn collect_response<B>(
    response: http::Response<B>,
) -> Result<http::Response<Bytes>, TransportError>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    let (parts, body) = response.into_parts();
    let collected = body
        .collect()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;
    Ok(http::Response::from_parts(parts, collected.to_bytes()))
}

/// Parse a collected body as JSON. An empty body parses as `{}`.
pub fn parse_json_body(body: &[u8]) -> Result<serde_json::Value, serde_json::Error> {
    if body.is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body)
}

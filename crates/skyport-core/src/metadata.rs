//! Response metadata extracted from status and headers.

use http::{HeaderMap, StatusCode};

/// Request id header.
pub const REQUEST_ID: &str = "x-amzn-requestid";
/// Alternate spelling of the request id header.
pub const REQUEST_ID_ALT: &str = "x-amzn-request-id";
/// Extended request id header.
pub const EXTENDED_REQUEST_ID: &str = "x-amz-id-2";
/// CloudFront id header.
pub const CF_ID: &str = "x-amz-cf-id";

/// Tracing identifiers and status attached to every output and error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// HTTP status code of the response.
    pub http_status_code: u16,
    /// Service request id.
    pub request_id: Option<String>,
    /// Extended request id.
    pub extended_request_id: Option<String>,
    /// CloudFront id.
    pub cf_id: Option<String>,
}

impl ResponseMetadata {
    /// Extract metadata from a response head. Never fails; missing or
    /// non-UTF-8 headers leave the field empty.
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: &HeaderMap) -> Self {
        Self {
            http_status_code: status.as_u16(),
            request_id: header(headers, REQUEST_ID).or_else(|| header(headers, REQUEST_ID_ALT)),
            extended_request_id: header(headers, EXTENDED_REQUEST_ID),
            cf_id: header(headers, CF_ID),
        }
    }

    /// Extract metadata from a response.
    #[must_use]
    pub fn from_response<B>(response: &http::Response<B>) -> Self {
        Self::from_parts(response.status(), response.headers())
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

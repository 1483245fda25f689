//! REST+JSON response classification and error-code resolution.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::{Map, Value};

use crate::body::parse_json_body;
use crate::metadata::ResponseMetadata;

/// Header carrying the error type.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Code used when neither headers nor body name the error.
pub const UNKNOWN_ERROR: &str = "UnknownError";

/// Returns `true` if the response should be decoded as the operation output.
///
/// Only statuses that are not 200 and at least 300 take the error path.
#[must_use]
pub fn is_success(status: StatusCode) -> bool {
    let code = status.as_u16();
    code == 200 || code < 300
}

/// Strip a `:`-suffix and a `namespace#` prefix from an error code.
///
/// Splits at the first `:` and, if a `#` remains, keeps what sits between the
/// first and second `#`.
///
/// # Examples
///
/// ```
/// use skyport_core::protocol::sanitize_error_code;
///
/// assert_eq!(
///     sanitize_error_code("ValidationException:http://internal.amazon.com/"),
///     "ValidationException"
/// );
/// assert_eq!(
///     sanitize_error_code("com.amazonaws.elasticsearchservice#BaseException"),
///     "BaseException"
/// );
/// ```
#[must_use]
pub fn sanitize_error_code(raw: &str) -> &str {
    let mut cleaned = raw.split(':').next().unwrap_or(raw);
    if cleaned.contains('#') {
        cleaned = cleaned.split('#').nth(1).unwrap_or_default();
    }
    cleaned
}

/// Determine the error code of a failed response.
///
/// Checked in order: the `x-amzn-errortype` header, a `code` or `Code` body
/// field, a `__type` body field. Falls back to [`UNKNOWN_ERROR`].
#[must_use]
pub fn resolve_error_code(headers: &HeaderMap, body: &Value) -> String {
    if let Some(value) = headers
        .get(ERROR_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        return sanitize_error_code(value).to_owned();
    }
    ["code", "Code", "__type"]
        .into_iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map_or_else(
            || UNKNOWN_ERROR.to_owned(),
            |code| sanitize_error_code(code).to_owned(),
        )
}

/// An error response reduced to its code, message and remaining body fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RestJsonError {
    /// Resolved error code.
    pub code: String,
    /// `message`, else `Message`, else the code itself.
    pub message: String,
    /// Body fields other than `message`/`Message`.
    pub fields: Map<String, Value>,
    /// Response metadata.
    pub metadata: ResponseMetadata,
}

impl RestJsonError {
    /// Classify a collected error response. Never fails: an unreadable body
    /// is treated as `{}`.
    #[must_use]
    pub fn from_response(response: &http::Response<Bytes>) -> Self {
        let metadata = ResponseMetadata::from_response(response);
        let body = match parse_json_body(response.body()) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    status = metadata.http_status_code,
                    error = %e,
                    "error response body is not valid JSON, ignoring it"
                );
                Value::Object(Map::new())
            }
        };
        let code = resolve_error_code(response.headers(), &body);
        let mut fields = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let message = take_message(&mut fields).unwrap_or_else(|| code.clone());
        Self {
            code,
            message,
            fields,
            metadata,
        }
    }
}

fn take_message(fields: &mut Map<String, Value>) -> Option<String> {
    let lower = fields.remove("message");
    let upper = fields.remove("Message");
    [lower, upper]
        .into_iter()
        .flatten()
        .find_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
}

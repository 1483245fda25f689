//! Error response dispatch.

use bytes::Bytes;
use skyport_core::protocol::RestJsonError;
use skyport_elasticsearch_model::error::ElasticsearchError;
use skyport_elasticsearch_model::operations::ElasticsearchOperation;

/// Turn a collected error response into an [`ElasticsearchError`].
///
/// The resolved code is matched against the operation's declared errors. A
/// code outside that set becomes an unhandled client error that still keeps
/// the code, the message and every other body field.
#[must_use]
pub fn deserialize_error(
    op: ElasticsearchOperation,
    response: &http::Response<Bytes>,
) -> ElasticsearchError {
    let raw = RestJsonError::from_response(response);
    let error = match op.declared_error(&raw.code) {
        Some(code) => ElasticsearchError::with_message(code, raw.message),
        None => {
            tracing::debug!(
                operation = %op,
                code = %raw.code,
                "error code not declared by operation"
            );
            ElasticsearchError::unhandled(raw.code, raw.message)
        }
    };
    error.with_metadata(raw.metadata).with_fields(raw.fields)
}

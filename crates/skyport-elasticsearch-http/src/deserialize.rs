//! Response decoding.

use bytes::Bytes;
use skyport_core::body::{collect_response, parse_json_body};
use skyport_core::protocol::is_success;
use skyport_core::{ResponseMetadata, SdkBody, SdkError};
use skyport_elasticsearch_model::error::ElasticsearchError;
use skyport_elasticsearch_model::operations::ElasticsearchOperation;
use skyport_elasticsearch_model::output::OperationOutput;

use crate::error::deserialize_error;

/// Drain a raw response and decode it into the operation output or error.
///
/// The body is read exactly once on both paths.
///
/// # Errors
///
/// Returns [`SdkError::Dispatch`] if the body stream fails,
/// [`SdkError::Response`] if a success body is not valid for the output, and
/// [`SdkError::Service`] for any error status.
pub async fn deserialize_response<O: OperationOutput>(
    op: ElasticsearchOperation,
    response: http::Response<SdkBody>,
) -> Result<O, SdkError<ElasticsearchError>> {
    let collected = collect_response(response).await?;
    deserialize_collected(op, &collected)
}

/// Decode an already-collected response.
///
/// # Errors
///
/// See [`deserialize_response`].
pub fn deserialize_collected<O: OperationOutput>(
    op: ElasticsearchOperation,
    response: &http::Response<Bytes>,
) -> Result<O, SdkError<ElasticsearchError>> {
    if !is_success(response.status()) {
        let error = deserialize_error(op, response);
        tracing::debug!(
            operation = %op,
            code = %error.code,
            status = error.metadata.http_status_code,
            "service returned error"
        );
        return Err(SdkError::Service(error));
    }

    let metadata = ResponseMetadata::from_response(response);
    let mut output = if O::HAS_PAYLOAD {
        decode_payload::<O>(op, response.body(), &metadata)?
    } else {
        O::default()
    };
    output.set_metadata(metadata);
    Ok(output)
}

fn decode_payload<O: OperationOutput>(
    op: ElasticsearchOperation,
    body: &[u8],
    metadata: &ResponseMetadata,
) -> Result<O, SdkError<ElasticsearchError>> {
    let invalid = |e: serde_json::Error| SdkError::Response {
        message: format!("{op}: {e}"),
        metadata: metadata.clone(),
    };
    let value = parse_json_body(body).map_err(invalid)?;
    tracing::trace!(operation = %op, bytes = body.len(), "decoding response body");
    serde_json::from_value(value).map_err(invalid)
}

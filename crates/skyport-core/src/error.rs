//! Error types for the Skyport runtime.
//!
//! Errors are split by the stage of a call that produced them:
//!
//! - [`BuildError`]: the request could not be constructed. Raised before the
//!   transport sees anything and never worth retrying.
//! - [`TransportError`]: the transport failed to deliver the request.
//! - [`SdkError::Response`]: a response arrived but could not be read or decoded.
//! - [`SdkError::Service`]: the service answered with a modeled error.

use crate::metadata::ResponseMetadata;

/// A request could not be built from the given input.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A URI label had no value.
    #[error("No value provided for input HTTP label: {0}.")]
    MissingLabel(&'static str),

    /// A URI label was the empty string.
    #[error("Empty value provided for input HTTP label: {0}.")]
    EmptyLabel(&'static str),

    /// The JSON body could not be produced.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The endpoint could not be resolved or parsed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A header name or value was rejected.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl BuildError {
    /// The input field this error refers to, for label errors.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingLabel(field) | Self::EmptyLabel(field) => Some(field),
            _ => None,
        }
    }
}

/// The transport failed to produce a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No transport has been configured for the client.
    #[error("no HTTP handler configured")]
    NotConfigured,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// Reading the response body failed.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A configuration value could not be provided.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    /// Human-readable description.
    pub message: String,
}

impl ProviderError {
    /// Create a provider error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The error returned by every client call.
///
/// `E` is the service-specific modeled error.
#[derive(Debug, thiserror::Error)]
pub enum SdkError<E>
where
    E: std::error::Error + 'static,
{
    /// The request could not be built. Nothing was sent.
    #[error("failed to construct request: {0}")]
    Construction(#[from] BuildError),

    /// The transport failed.
    #[error("failed to dispatch request: {0}")]
    Dispatch(#[from] TransportError),

    /// A response arrived but its body could not be decoded.
    #[error("invalid response: {message}")]
    Response {
        /// What went wrong.
        message: String,
        /// Metadata extracted from the response head.
        metadata: ResponseMetadata,
    },

    /// The service returned an error.
    #[error(transparent)]
    Service(E),
}

impl<E> SdkError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns the service error, if this is one.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Consumes the error and returns the service error, if this is one.
    #[must_use]
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the request was rejected before being sent.
    #[must_use]
    pub fn is_construction_failure(&self) -> bool {
        matches!(self, Self::Construction(_))
    }

    /// Transform the service error type.
    pub fn map_service_error<F, T>(self, f: F) -> SdkError<T>
    where
        F: FnOnce(E) -> T,
        T: std::error::Error + 'static,
    {
        match self {
            Self::Construction(err) => SdkError::Construction(err),
            Self::Dispatch(err) => SdkError::Dispatch(err),
            Self::Response { message, metadata } => SdkError::Response { message, metadata },
            Self::Service(err) => SdkError::Service(f(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_should_format_label_errors() {
        let err = BuildError::EmptyLabel("DomainName");
        assert_eq!(
            err.to_string(),
            "Empty value provided for input HTTP label: DomainName."
        );
        assert_eq!(err.field(), Some("DomainName"));

        let err = BuildError::MissingLabel("PackageID");
        assert_eq!(
            err.to_string(),
            "No value provided for input HTTP label: PackageID."
        );
    }

    #[test]
    fn test_should_convert_build_error_into_sdk_error() {
        let err: SdkError<Boom> = BuildError::MissingLabel("DomainName").into();
        assert!(err.is_construction_failure());
        assert!(err.as_service_error().is_none());
    }

    #[test]
    fn test_should_expose_service_error() {
        let err: SdkError<Boom> = SdkError::Service(Boom);
        assert!(!err.is_construction_failure());
        assert_eq!(err.to_string(), "boom");
        assert!(err.into_service_error().is_some());
    }
}

//! Elasticsearch Service error types.
//!
//! The service names errors with a short code, carried either in the
//! `x-amzn-errortype` header or in the JSON body. Each operation declares the
//! closed set of codes it may return; anything else surfaces as an error with
//! [`ElasticsearchErrorCode::Unhandled`].

use std::fmt;

use serde_json::{Map, Value};
use skyport_core::ResponseMetadata;

/// Namespace prefix of fully-qualified error codes.
pub const ERROR_NAMESPACE: &str = "com.amazonaws.elasticsearchservice";

/// Who is to blame for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fault {
    /// The request was wrong.
    #[default]
    Client,
    /// The service failed.
    Server,
}

impl Fault {
    /// Returns `client` or `server`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modeled Elasticsearch Service error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ElasticsearchErrorCode {
    /// The caller lacks permission.
    AccessDeniedException,
    /// Generic service error.
    BaseException,
    /// A concurrent change conflicts with this request.
    ConflictException,
    /// The account may not perform this operation.
    DisabledOperationException,
    /// Internal failure of the service.
    InternalException,
    /// The pagination token is not valid.
    InvalidPaginationTokenException,
    /// The instance or storage type is not valid.
    InvalidTypeException,
    /// A service quota was hit.
    LimitExceededException,
    /// The resource exists already.
    ResourceAlreadyExistsException,
    /// The resource does not exist.
    ResourceNotFoundException,
    /// The input failed validation.
    ValidationException,
    /// A code outside the operation's declared set.
    Unhandled(String),
}

impl ElasticsearchErrorCode {
    /// Every modeled code.
    pub const MODELED: &'static [Self] = &[
        Self::AccessDeniedException,
        Self::BaseException,
        Self::ConflictException,
        Self::DisabledOperationException,
        Self::InternalException,
        Self::InvalidPaginationTokenException,
        Self::InvalidTypeException,
        Self::LimitExceededException,
        Self::ResourceAlreadyExistsException,
        Self::ResourceNotFoundException,
        Self::ValidationException,
    ];

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccessDeniedException => "AccessDeniedException",
            Self::BaseException => "BaseException",
            Self::ConflictException => "ConflictException",
            Self::DisabledOperationException => "DisabledOperationException",
            Self::InternalException => "InternalException",
            Self::InvalidPaginationTokenException => "InvalidPaginationTokenException",
            Self::InvalidTypeException => "InvalidTypeException",
            Self::LimitExceededException => "LimitExceededException",
            Self::ResourceAlreadyExistsException => "ResourceAlreadyExistsException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ValidationException => "ValidationException",
            Self::Unhandled(code) => code.as_str(),
        }
    }

    /// Returns `true` if the code matches either the short or namespaced name.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        code == self.as_str()
            || code
                .strip_prefix(ERROR_NAMESPACE)
                .and_then(|rest| rest.strip_prefix('#'))
                .is_some_and(|short| short == self.as_str())
    }

    /// Fault category of the code.
    #[must_use]
    pub fn fault(&self) -> Fault {
        match self {
            Self::InternalException => Fault::Server,
            _ => Fault::Client,
        }
    }
}

impl fmt::Display for ElasticsearchErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned by the Elasticsearch Service.
#[derive(Debug)]
pub struct ElasticsearchError {
    /// The error code.
    pub code: ElasticsearchErrorCode,
    /// Human-readable message. Never empty: falls back to the code.
    pub message: String,
    /// Fault category.
    pub fault: Fault,
    /// Metadata of the response that carried the error.
    pub metadata: ResponseMetadata,
    /// Body fields other than the message.
    pub fields: Map<String, Value>,
}

impl fmt::Display for ElasticsearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElasticsearchError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for ElasticsearchError {}

impl ElasticsearchError {
    /// Create an error with a custom message.
    #[must_use]
    pub fn with_message(code: ElasticsearchErrorCode, message: impl Into<String>) -> Self {
        Self {
            fault: code.fault(),
            message: message.into(),
            code,
            metadata: ResponseMetadata::default(),
            fields: Map::new(),
        }
    }

    /// An error for a code the operation does not declare.
    #[must_use]
    pub fn unhandled(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_message(ElasticsearchErrorCode::Unhandled(code.into()), message)
    }

    /// Attach response metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach the remaining body fields.
    #[must_use]
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    /// The error code string.
    #[must_use]
    pub fn code_str(&self) -> &str {
        self.code.as_str()
    }

    /// Returns `true` for modeled (declared) errors.
    #[must_use]
    pub fn is_modeled(&self) -> bool {
        !matches!(self.code, ElasticsearchErrorCode::Unhandled(_))
    }

    /// Look up a body field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

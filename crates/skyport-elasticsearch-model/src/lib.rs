//! Elasticsearch Service model types for Skyport.
//!
//! Hand-written shapes for API version `2015-01-01`. The REST+JSON protocol
//! maps each shape directly onto a JSON object, so serde derives do the work:
//! inputs serialize to request bodies, outputs deserialize from response
//! bodies, shared types go both ways.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod pagination;
pub mod types;

pub use error::{ElasticsearchError, ElasticsearchErrorCode, Fault};
pub use operations::ElasticsearchOperation;
pub use output::OperationOutput;

//! Elasticsearch Service REST+JSON binding for Skyport.
//!
//! Turns operation inputs into [`HttpRequest`](skyport_core::HttpRequest)s
//! and HTTP responses back into outputs or [`ElasticsearchError`]s:
//!
//! - [`serialize`]: one [`SerializeRequest`] implementation per operation input
//! - [`deserialize`]: status branching, body draining, output decoding
//! - [`error`]: error-code resolution against each operation's declared set
//!
//! [`ElasticsearchError`]: skyport_elasticsearch_model::ElasticsearchError

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{deserialize_collected, deserialize_response};
pub use error::deserialize_error;
pub use serialize::SerializeRequest;

//! Protocol runtime shared by Skyport service clients.
//!
//! This crate holds everything a REST+JSON client needs that is not specific
//! to one service:
//!
//! - **Request envelope**: [`HttpRequest`] and the label/query/body
//!   [`RequestBuilder`]
//! - **Response handling**: body draining, [`ResponseMetadata`], error-code
//!   resolution
//! - **Shapes**: serde helpers for timestamps, sparse lists and maps, string enums
//! - **Configuration**: regions, endpoints, shared config file lookup
//! - **Call pipeline**: interceptors, the transport trait, pagination

pub mod body;
pub mod config;
pub mod encoding;
pub mod error;
pub mod interceptor;
pub mod metadata;
pub mod paginate;
pub mod protocol;
pub mod request;
pub mod shape;
pub mod transport;
pub mod types;

#[doc(hidden)]
pub use serde as __serde;

pub use body::SdkBody;
pub use error::{BuildError, ProviderError, SdkError, TransportError};
pub use interceptor::{Interceptor, InterceptorContext, InterceptorStack};
pub use metadata::ResponseMetadata;
pub use request::{HttpRequest, RequestBuilder};
pub use transport::{HandlerFuture, HttpHandler};
pub use types::{Endpoint, Region, ResolveEndpoint};

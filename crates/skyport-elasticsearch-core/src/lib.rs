//! Elasticsearch Service client for Skyport.
//!
//! [`ElasticsearchClient`] exposes one async method per operation of API
//! version `2015-01-01`, plus a paginator for each token-paginated operation.
//! Requests flow through a fixed interceptor stack and a pluggable
//! [`HttpHandler`](skyport_core::HttpHandler); this crate opens no sockets.
//!
//! ```no_run
//! use skyport_elasticsearch_core::{ClientConfig, ElasticsearchClient};
//! use skyport_elasticsearch_model::input::DescribeElasticsearchDomainInput;
//!
//! # async fn run(handler: impl skyport_core::HttpHandler) -> Result<(), Box<dyn std::error::Error>> {
//! let client = ElasticsearchClient::new(ClientConfig::from_env().with_http_handler(handler));
//! let out = client
//!     .describe_elasticsearch_domain(DescribeElasticsearchDomainInput {
//!         domain_name: Some("logs".to_owned()),
//!     })
//!     .await?;
//! println!("{:?}", out.domain_status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod interceptor;
pub mod paginator;

pub use client::{ClientResult, ElasticsearchClient};
pub use config::ClientConfig;
pub use interceptor::InvocationIdInterceptor;

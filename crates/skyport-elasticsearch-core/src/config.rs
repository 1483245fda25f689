//! Client configuration.
//!
//! A [`ClientConfig`] is assembled once and frozen when the client is built.
//! Values can be set explicitly through the builder or resolved from the
//! environment with [`ClientConfig::from_env`], which follows the usual
//! precedence: environment variables, then the shared config file, then
//! built-in defaults.

use std::fmt;
use std::sync::Arc;

use skyport_core::config::{SharedConfigInit, from_shared_config_files};
use skyport_core::transport::NotConfiguredHandler;
use skyport_core::types::RegionalEndpoint;
use skyport_core::{Endpoint, HttpHandler, Interceptor, Region, ResolveEndpoint};
use typed_builder::TypedBuilder;

/// DNS prefix of the service endpoint.
pub const ENDPOINT_PREFIX: &str = "es";

/// Service name used in logs and interceptor context.
pub const SERVICE_NAME: &str = "Elasticsearch Service";

/// API version implemented by this client.
pub const API_VERSION: &str = "2015-01-01";

const ENV_REGION: &str = "AWS_REGION";
const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const ENV_ENDPOINT_URL_SERVICE: &str = "AWS_ENDPOINT_URL_ELASTICSEARCH_SERVICE";
const ENV_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

/// Default user agent, `skyport-elasticsearch/<version>`.
#[must_use]
pub fn default_user_agent() -> String {
    format!("skyport-elasticsearch/{}", env!("CARGO_PKG_VERSION"))
}

/// Elasticsearch Service client configuration.
///
/// # Examples
///
/// ```
/// use skyport_core::{Endpoint, Region};
/// use skyport_elasticsearch_core::config::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .region(Region::new("eu-west-1"))
///     .endpoint(Endpoint::new("localhost").with_protocol("http").with_port(4566))
///     .build();
/// assert_eq!(config.region.as_str(), "eu-west-1");
/// assert!(config.user_agent.starts_with("skyport-elasticsearch/"));
/// ```
#[derive(Clone, TypedBuilder)]
pub struct ClientConfig {
    /// Region to target.
    #[builder(default)]
    pub region: Region,

    /// Fixed endpoint that replaces the regional one.
    #[builder(default, setter(strip_option))]
    pub endpoint: Option<Endpoint>,

    /// Value of `user-agent` and `x-amz-user-agent`.
    #[builder(default = default_user_agent(), setter(into))]
    pub user_agent: String,

    /// Shared config file profile the configuration was resolved from.
    #[builder(default, setter(strip_option, into))]
    pub profile: Option<String>,

    /// Transport that delivers requests.
    #[builder(default = Arc::new(NotConfiguredHandler))]
    pub http_handler: Arc<dyn HttpHandler>,

    /// Interceptors appended after the built-in ones.
    #[builder(default)]
    pub interceptors: Vec<Arc<dyn Interceptor>>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .field("profile", &self.profile)
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientConfig {
    /// Resolve region and endpoint from the environment and the shared
    /// config file of the active profile.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(&SharedConfigInit::default())
    }

    /// Like [`from_env`](Self::from_env), with explicit shared file options.
    #[must_use]
    pub fn from_env_with(init: &SharedConfigInit) -> Self {
        resolve(|key| std::env::var(key).ok(), init)
    }

    /// Replace the transport.
    #[must_use]
    pub fn with_http_handler(mut self, handler: impl HttpHandler) -> Self {
        self.http_handler = Arc::new(handler);
        self
    }

    /// Append an interceptor.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// The endpoint resolver requests are built against.
    #[must_use]
    pub fn endpoint_resolver(&self) -> Arc<dyn ResolveEndpoint> {
        match &self.endpoint {
            Some(endpoint) => Arc::new(endpoint.clone()),
            None => Arc::new(RegionalEndpoint {
                endpoint_prefix: ENDPOINT_PREFIX,
                region: self.region.clone(),
            }),
        }
    }
}

fn resolve(env: impl Fn(&str) -> Option<String>, init: &SharedConfigInit) -> ClientConfig {
    let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

    let region = non_empty(ENV_REGION)
        .or_else(|| non_empty(ENV_DEFAULT_REGION))
        .or_else(|| match from_shared_config_files("region", init) {
            Ok(region) => Some(region),
            Err(e) => {
                tracing::debug!(error = %e, "falling back to default region");
                None
            }
        })
        .map_or_else(Region::default, Region::new);

    let endpoint = non_empty(ENV_ENDPOINT_URL_SERVICE)
        .or_else(|| non_empty(ENV_ENDPOINT_URL))
        .and_then(|url| match Endpoint::parse(&url) {
            Ok(endpoint) => Some(endpoint),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "ignoring invalid endpoint override");
                None
            }
        });

    ClientConfig {
        region,
        endpoint,
        profile: Some(init.resolve_profile()),
        ..ClientConfig::default()
    }
}

//! Region and endpoint types shared by all service clients.

use std::fmt;

use crate::error::BuildError;

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region(String);

impl Region {
    /// Region used when nothing else is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The DNS suffix of the partition this region belongs to.
    #[must_use]
    pub fn dns_suffix(&self) -> &'static str {
        if self.0.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// URL scheme without the trailing `:`, usually `https`.
    pub protocol: String,
    /// Host name without port.
    pub hostname: String,
    /// Explicit port, if any.
    pub port: Option<u16>,
}

impl Endpoint {
    /// Create an endpoint for the given host using `https`.
    #[must_use]
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            protocol: "https".to_owned(),
            hostname: hostname.into(),
            port: None,
        }
    }

    /// Set the protocol.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// The regional endpoint of a service, e.g. `https://es.us-east-1.amazonaws.com`.
    #[must_use]
    pub fn regional(endpoint_prefix: &str, region: &Region) -> Self {
        Self::new(format!(
            "{endpoint_prefix}.{}.{}",
            region.as_str(),
            region.dns_suffix()
        ))
    }

    /// Parse an endpoint from a URL such as `http://localhost:4566`.
    pub fn parse(url: &str) -> Result<Self, BuildError> {
        let uri: http::Uri = url
            .parse()
            .map_err(|e| BuildError::InvalidEndpoint(format!("{url}: {e}")))?;
        let hostname = uri
            .host()
            .ok_or_else(|| BuildError::InvalidEndpoint(format!("{url}: missing host")))?;
        Ok(Self {
            protocol: uri.scheme_str().unwrap_or("https").to_owned(),
            hostname: hostname.to_owned(),
            port: uri.port_u16(),
        })
    }

    /// Value for the `host` header: the host name plus any explicit port.
    #[must_use]
    pub fn authority(&self) -> String {
        authority(&self.hostname, self.port)
    }
}

/// `host[:port]`, the port only when one is set.
#[must_use]
pub fn authority(hostname: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{hostname}:{port}"),
        None => hostname.to_owned(),
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.protocol, self.authority())
    }
}

/// Supplies the destination of a request being built.
pub trait ResolveEndpoint: Send + Sync + fmt::Debug {
    /// Resolve the endpoint for the next request.
    fn resolve_endpoint(&self) -> Result<Endpoint, BuildError>;
}

impl ResolveEndpoint for Endpoint {
    fn resolve_endpoint(&self) -> Result<Endpoint, BuildError> {
        Ok(self.clone())
    }
}

/// Resolves the standard regional endpoint of a service.
#[derive(Debug, Clone)]
pub struct RegionalEndpoint {
    /// DNS prefix of the service, e.g. `es`.
    pub endpoint_prefix: &'static str,
    /// Region to target.
    pub region: Region,
}

impl ResolveEndpoint for RegionalEndpoint {
    fn resolve_endpoint(&self) -> Result<Endpoint, BuildError> {
        if self.region.as_str().is_empty() {
            return Err(BuildError::InvalidEndpoint("region is empty".to_owned()));
        }
        Ok(Endpoint::regional(self.endpoint_prefix, &self.region))
    }
}

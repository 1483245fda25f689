//! The HTTP request envelope produced by operation serializers.
//!
//! [`RequestBuilder`] turns a URI template plus typed input values into an
//! [`HttpRequest`]:
//!
//! - `{Label}` placeholders are substituted with extended percent-encoding. A
//!   missing or empty label is a [`BuildError`], raised before any I/O.
//! - Query parameters are only added for present values.
//! - A JSON body sets `content-type: application/json`.
//! - An explicit empty body is kept distinct from no body at all.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

use crate::encoding::extended_encode;
use crate::error::BuildError;
use crate::types::{ResolveEndpoint, authority};

/// Content type of REST+JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully built request, ready for the interceptors and the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// URL scheme, e.g. `https`.
    pub protocol: String,
    /// Destination host name.
    pub hostname: String,
    /// Explicit destination port.
    pub port: Option<u16>,
    /// Resolved path, already percent-encoded.
    pub path: String,
    /// Unencoded query pairs, in the order they were added.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// `None` means no body; `Some` with zero bytes is an explicit empty body.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Render the query string, sorted by key, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.query.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", extended_encode(k), extended_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path plus query string.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{query}", self.path)
        }
    }

    /// Host name plus any explicit port.
    #[must_use]
    pub fn authority(&self) -> String {
        authority(&self.hostname, self.port)
    }

    /// The absolute request URI.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{}://{}{}", self.protocol, self.authority(), self.path_and_query())
    }

    /// Get a header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| BuildError::InvalidHeader {
                name: name.to_owned(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| BuildError::InvalidHeader {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// The body decoded as UTF-8, if there is one.
    #[must_use]
    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Convert into an `http::Request` for transports built on the `http` crate.
    ///
    /// A missing body becomes an empty one; the distinction survives in the
    /// `content-length` header set by the content-length interceptor.
    pub fn into_http(self) -> Result<http::Request<Bytes>, BuildError> {
        let uri = self.uri();
        let mut builder = http::Request::builder().method(self.method).uri(&uri);
        if let Some(headers) = builder.headers_mut() {
            *headers = self.headers;
        }
        builder
            .body(self.body.unwrap_or_default())
            .map_err(|e| BuildError::InvalidEndpoint(format!("{uri}: {e}")))
    }
}

/// Builds an [`HttpRequest`] from a URI template.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Start a request for the given method and URI template.
    #[must_use]
    pub fn new(method: Method, template: &str) -> Self {
        Self {
            method,
            path: template.to_owned(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Substitute the `{name}` placeholder with an encoded label value.
    pub fn label(mut self, name: &'static str, value: Option<&str>) -> Result<Self, BuildError> {
        let value = value.ok_or(BuildError::MissingLabel(name))?;
        if value.is_empty() {
            return Err(BuildError::EmptyLabel(name));
        }
        let placeholder = format!("{{{name}}}");
        self.path = self.path.replacen(&placeholder, &extended_encode(value), 1);
        Ok(self)
    }

    /// Add a query parameter when the value is present.
    #[must_use]
    pub fn query<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_owned(), value.to_string()));
        }
        self
    }

    /// Add one query parameter per list element. Duplicates are kept.
    #[must_use]
    pub fn query_list(mut self, key: &str, values: Option<&[String]>) -> Self {
        for value in values.unwrap_or_default() {
            self.query.push((key.to_owned(), value.clone()));
        }
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, BuildError> {
        let json = serde_json::to_vec(body)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        self.body = Some(Bytes::from(json));
        Ok(self)
    }

    /// Send an explicit empty body.
    #[must_use]
    pub fn empty_body(mut self) -> Self {
        self.body = Some(Bytes::new());
        self
    }

    /// Resolve the endpoint and produce the request.
    pub fn build(self, endpoint: &dyn ResolveEndpoint) -> Result<HttpRequest, BuildError> {
        let endpoint = endpoint.resolve_endpoint()?;
        Ok(HttpRequest {
            method: self.method,
            protocol: endpoint.protocol,
            hostname: endpoint.hostname,
            port: endpoint.port,
            path: self.path,
            query: self.query,
            headers: self.headers,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Endpoint;

    fn endpoint() -> Endpoint {
        Endpoint::new("es.us-east-1.amazonaws.com")
    }

    #[test]
    fn test_should_substitute_encoded_label() {
        let req = RequestBuilder::new(Method::DELETE, "/2015-01-01/es/domain/{DomainName}")
            .label("DomainName", Some("my domain"))
            .unwrap()
            .build(&endpoint())
            .unwrap();
        assert_eq!(req.path, "/2015-01-01/es/domain/my%20domain");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_should_fail_on_missing_or_empty_label() {
        let err = RequestBuilder::new(Method::GET, "/x/{PackageID}")
            .label("PackageID", None)
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingLabel("PackageID")));

        let err = RequestBuilder::new(Method::GET, "/x/{PackageID}")
            .label("PackageID", Some(""))
            .unwrap_err();
        assert!(matches!(err, BuildError::EmptyLabel("PackageID")));
    }

    #[test]
    fn test_should_skip_absent_query_values() {
        let req = RequestBuilder::new(Method::GET, "/2015-01-01/es/versions")
            .query("maxResults", Some(10))
            .query::<&str>("nextToken", None)
            .build(&endpoint())
            .unwrap();
        assert_eq!(req.query, vec![("maxResults".to_owned(), "10".to_owned())]);
        assert_eq!(req.path_and_query(), "/2015-01-01/es/versions?maxResults=10");
    }

    #[test]
    fn test_should_sort_and_encode_query_string() {
        let req = RequestBuilder::new(Method::GET, "/p")
            .query("nextToken", Some("a b"))
            .query("maxResults", Some(5))
            .query_list("tag", Some(&["x".to_owned(), "x".to_owned()]))
            .build(&endpoint())
            .unwrap();
        assert_eq!(req.query_string(), "maxResults=5&nextToken=a%20b&tag=x&tag=x");
    }

    #[test]
    fn test_should_distinguish_empty_body_from_no_body() {
        let empty = RequestBuilder::new(Method::DELETE, "/2015-01-01/es/role")
            .empty_body()
            .build(&endpoint())
            .unwrap();
        assert_eq!(empty.body.as_deref(), Some(&b""[..]));
        assert!(empty.header("content-type").is_none());
    }

    #[test]
    fn test_should_set_json_content_type() {
        let req = RequestBuilder::new(Method::POST, "/2015-01-01/tags")
            .json_body(&serde_json::json!({"ARN": "arn:aws:es:x"}))
            .unwrap()
            .build(&endpoint())
            .unwrap();
        assert_eq!(req.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(req.body_str(), Some(r#"{"ARN":"arn:aws:es:x"}"#));
    }

    #[test]
    fn test_should_render_absolute_uri() {
        let req = RequestBuilder::new(Method::GET, "/2015-01-01/domain")
            .build(&Endpoint::new("localhost").with_protocol("http").with_port(4566))
            .unwrap();
        assert_eq!(req.uri(), "http://localhost:4566/2015-01-01/domain");
        assert_eq!(req.authority(), "localhost:4566");
        let http_req = req.into_http().unwrap();
        assert_eq!(http_req.uri().path(), "/2015-01-01/domain");
        assert!(http_req.body().is_empty());
    }

    #[test]
    fn test_should_omit_port_from_authority_when_unset() {
        let req = RequestBuilder::new(Method::GET, "/2015-01-01/domain")
            .build(&Endpoint::new("es.us-east-1.amazonaws.com"))
            .unwrap();
        assert_eq!(req.authority(), "es.us-east-1.amazonaws.com");
        assert_eq!(req.uri(), "https://es.us-east-1.amazonaws.com/2015-01-01/domain");
    }
}

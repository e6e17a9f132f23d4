//! The inbound request record.
//!
//! [`Request`] aggregates everything the engine reads from an HTTP request:
//! method, URI, headers, and the raw body bytes. Query parameters and form
//! fields are derived from these on demand rather than stored separately, so
//! the record stays a plain immutable snapshot.

use bytes::Bytes;
use http::{HeaderMap, Method, Uri};

/// An immutable snapshot of an inbound HTTP request.
///
/// The engine never reads ambient request state; every component receives
/// this record (or a part of it) explicitly.
///
/// # Example
///
/// ```rust
/// use hermes_core::Request;
/// use http::Method;
///
/// let request = Request::builder()
///     .method(Method::GET)
///     .uri("/api/user/42?expand=profile")
///     .header("origin", "http://localhost:8081")
///     .build();
///
/// assert_eq!(request.path(), "/api/user/42");
/// assert_eq!(request.query_string(), Some("expand=profile"));
/// assert_eq!(request.header("origin"), Some("http://localhost:8081"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    /// Creates a new request record.
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    /// Creates a builder for tests and adapters.
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path portion of the URI.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the query string if present.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a specific header value as a string.
    ///
    /// Non-UTF-8 header values are treated as absent.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the `Origin` header value, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.header("origin")
    }

    /// Returns the Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the raw request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Checks if the request body is empty.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Builder for constructing a [`Request`].
///
/// Primarily used by tests and by server adapters translating their native
/// request type into the engine's record.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    uri: Option<Uri>,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestBuilder {
    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the URI from anything convertible into one.
    ///
    /// Invalid URIs are ignored; `build` falls back to `/`.
    #[must_use]
    pub fn uri<U>(mut self, uri: U) -> Self
    where
        U: TryInto<Uri>,
    {
        if let Ok(uri) = uri.try_into() {
            self.uri = Some(uri);
        }
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = value.parse() {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the request record.
    ///
    /// Missing method defaults to `GET`, missing URI to `/`.
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method.unwrap_or(Method::GET),
            uri: self.uri.unwrap_or_else(|| Uri::from_static("/")),
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accessors() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/posts?draft=true")
            .header("content-type", "application/json")
            .body(r#"{"title":"hello"}"#)
            .build();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.path(), "/api/posts");
        assert_eq!(request.query_string(), Some("draft=true"));
        assert_eq!(request.content_type(), Some("application/json"));
        assert!(!request.is_body_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let request = Request::builder().build();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/");
        assert_eq!(request.query_string(), None);
        assert!(request.is_body_empty());
    }

    #[test]
    fn test_missing_header() {
        let request = Request::builder().uri("/x").build();
        assert_eq!(request.header("origin"), None);
        assert_eq!(request.origin(), None);
    }

    #[test]
    fn test_origin_header() {
        let request = Request::builder()
            .uri("/x")
            .header("origin", "http://localhost:8081")
            .build();
        assert_eq!(request.origin(), Some("http://localhost:8081"));
    }
}

//! Raw HTTP request view handed over by the host framework.
//!
//! [`RawRequest`] is the transport-level input to a resolution. It is cheap
//! to clone (the body is a reference-counted [`Bytes`]) so every request
//! object can own its copy.

use bytes::Bytes;
use http::{HeaderMap, Method, Uri};

/// The raw request a request object is populated from.
///
/// # Example
///
/// ```rust
/// use reqbind_core::RawRequest;
/// use http::{HeaderMap, Method, Uri};
/// use bytes::Bytes;
///
/// let request = RawRequest::new(
///     Method::POST,
///     Uri::from_static("/users?invite=1"),
///     HeaderMap::new(),
///     Bytes::from_static(br#"{"name": "Alice"}"#),
/// );
///
/// assert_eq!(request.path(), "/users");
/// assert_eq!(request.query_string(), Some("invite=1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl RawRequest {
    /// Creates a new raw request.
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    /// Returns a builder for a request.
    #[must_use]
    pub fn builder() -> RawRequestBuilder {
        RawRequestBuilder::new()
    }

    /// Creates a body-less `GET` request for a static URI.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a valid URI (for example `"/a b"`). Use
    /// [`RawRequest::builder`] with a parsed [`Uri`] for untrusted input.
    #[must_use]
    pub fn get(uri: &'static str) -> Self {
        Self::new(
            Method::GET,
            Uri::from_static(uri),
            HeaderMap::new(),
            Bytes::new(),
        )
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
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the request body as bytes.
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

impl From<http::Request<Bytes>> for RawRequest {
    fn from(request: http::Request<Bytes>) -> Self {
        let (parts, body) = request.into_parts();
        Self::new(parts.method, parts.uri, parts.headers, body)
    }
}

/// Builder for constructing a [`RawRequest`].
///
/// Unset method and URI default to `GET /`.
#[derive(Debug, Default)]
pub struct RawRequestBuilder {
    method: Option<Method>,
    uri: Option<Uri>,
    headers: HeaderMap,
    body: Bytes,
}

impl RawRequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the URI.
    #[must_use]
    pub fn uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Adds a single header. Invalid header values are skipped.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = value.parse() {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a JSON body and the matching Content-Type header.
    #[must_use]
    pub fn json(self, body: &serde_json::Value) -> Self {
        self.header("content-type", "application/json")
            .body(body.to_string())
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> RawRequest {
        RawRequest {
            method: self.method.unwrap_or(Method::GET),
            uri: self.uri.unwrap_or_else(|| Uri::from_static("/")),
            headers: self.headers,
            body: self.body,
        }
    }
}

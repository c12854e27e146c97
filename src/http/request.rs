use bytes::Bytes;

/// HTTP request methods.
///
/// Closed set of methods the parser recognizes. A start line carrying any
/// other token parses successfully with `INVALID`; rejecting it is left to
/// the route that receives the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Unrecognized method token
    INVALID,
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

impl Method {
    /// Maps a start-line token to a method. Unknown tokens map to `INVALID`.
    ///
    /// # Example
    ///
    /// ```
    /// # use beacon::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("BREW"), Method::INVALID);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::INVALID,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::INVALID => "INVALID",
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }
}

/// Request header map.
///
/// Keys are stored trimmed and lower-cased; lookup is case-insensitive.
/// Insertion order is preserved for re-serialization, duplicate keys replace
/// the earlier value in place.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = key.trim().to_ascii_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Immutable once constructed; the router produces a rewritten copy via
/// [`Request::with_uri`] rather than mutating in place.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request URI, including any query string
    pub uri: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers
    pub headers: Headers,
    /// Request body; empty unless a positive Content-Length was declared
    pub body: Bytes,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    uri: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Bytes,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            uri: None,
            version: None,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            uri: self.uri.ok_or("uri missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Determines whether the connection should remain open after the reply.
    ///
    /// HTTP/1.1 defaults to keep-alive; HTTP/1.0 or `Connection: close`
    /// opts out.
    pub fn keep_alive(&self) -> bool {
        match self.header("Connection") {
            Some(v) => v.eq_ignore_ascii_case("keep-alive"),
            None => self.version == "HTTP/1.1",
        }
    }

    /// Returns a copy of this request with the URI replaced, used by the
    /// router to hand routes a route-relative path.
    pub fn with_uri(&self, uri: impl Into<String>) -> Request {
        Request {
            uri: uri.into(),
            ..self.clone()
        }
    }
}

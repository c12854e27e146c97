/// HTTP status codes supported by the server.
///
/// Common HTTP status codes used in replies:
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created successfully
/// - `NoContent` (204): Successful request with no content
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Resource not found
/// - `MethodNotAllowed` (405): HTTP method not supported
/// - `InternalServerError` (500): Server error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl Status {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::NoContent => 204,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Created => "Created",
            Status::NoContent => "No Content",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

const HTTP_VERSION: &str = "HTTP/1.1";

/// An HTTP reply under construction.
///
/// Unlike [`Request`] headers, reply headers are an ordered list of raw
/// lines: handlers append them incrementally and the wire output preserves
/// that order. `Content-Length` is derived from the accumulated content at
/// serialization time, never set by hand.
///
/// [`Request`]: crate::http::request::Request
#[derive(Debug)]
pub struct Reply {
    /// The HTTP status code
    pub status: Status,
    header_lines: Vec<String>,
    content: Vec<u8>,
}

impl Reply {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            header_lines: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Appends one header line, preserving insertion order on the wire.
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.header_lines.push(format!("{name}: {value}"));
    }

    /// Appends bytes to the reply content.
    pub fn append_content(&mut self, bytes: &[u8]) {
        self.content.extend_from_slice(bytes);
    }

    pub fn headers(&self) -> &[String] {
        &self.header_lines
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Serializes to wire form: status line, header lines, derived
    /// Content-Length, blank line, raw content.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128 + self.content.len());

        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        buf.extend_from_slice(status_line.as_bytes());

        for line in &self.header_lines {
            buf.extend_from_slice(line.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }

        buf.extend_from_slice(format!("Content-Length: {}\r\n", self.content.len()).as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(&self.content);

        buf
    }

    /// Creates a simple 200 OK reply with the given content.
    pub fn ok(content: impl Into<Vec<u8>>) -> Self {
        let mut reply = Reply::new(Status::Ok);
        reply.content = content.into();
        reply
    }

    /// Creates a 400 Bad Request reply.
    pub fn bad_request() -> Self {
        let mut reply = Reply::new(Status::BadRequest);
        reply.append_content(b"400 Bad Request");
        reply
    }

    /// Creates a 404 Not Found reply.
    pub fn not_found() -> Self {
        let mut reply = Reply::new(Status::NotFound);
        reply.append_content(b"404 Not Found");
        reply
    }

    /// Creates a 405 Method Not Allowed reply.
    pub fn method_not_allowed() -> Self {
        let mut reply = Reply::new(Status::MethodNotAllowed);
        reply.append_content(b"405 Method Not Allowed");
        reply
    }

    /// Creates a 500 Internal Server Error reply.
    pub fn internal_error() -> Self {
        let mut reply = Reply::new(Status::InternalServerError);
        reply.append_content(b"500 Internal Server Error");
        reply
    }
}

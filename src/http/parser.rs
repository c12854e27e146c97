use bytes::Bytes;

use crate::http::framer::{FrameError, LineFramer};
use crate::http::request::{Headers, Method, Request};
use crate::http::uri;

/// Errors raised while parsing a request off the wire.
///
/// `Frame` is fatal: the connection closes without a response. Everything
/// else is a validation failure answered with a 400-class reply.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("malformed request line: {0:?}")]
    BadStartLine(String),
    #[error("unsupported protocol version: {0:?}")]
    BadVersion(String),
    #[error("disallowed characters in request uri: {0:?}")]
    BadUri(String),
    #[error("malformed header line: {0:?}")]
    BadHeader(String),
    #[error("invalid content-length: {0:?}")]
    BadContentLength(String),
    #[error("declared body of {0} bytes exceeds the configured limit")]
    BodyTooLarge(usize),
}

impl ParseError {
    /// Fatal errors terminate the connection without a response on the wire.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Frame(_))
    }
}

const BODY_RESERVE: usize = 16 * 1024;

enum State {
    StartLine,
    Headers,
    Body { remaining: usize },
}

#[derive(Default)]
struct Draft {
    method: Option<Method>,
    uri: String,
    version: String,
    headers: Headers,
    body: Vec<u8>,
}

/// Incremental HTTP request parser.
///
/// A state machine over the [`LineFramer`]: the start line and headers are
/// consumed as lines, the body as exactly `Content-Length` raw bytes. After
/// each completed request the parser resets to the start-line state, so one
/// connection can carry any number of pipelined requests.
pub struct RequestParser {
    framer: LineFramer,
    max_body_len: usize,
    state: State,
    draft: Draft,
}

impl RequestParser {
    pub fn new(max_line_len: usize, max_body_len: usize) -> Self {
        Self {
            framer: LineFramer::new(max_line_len),
            max_body_len,
            state: State::StartLine,
            draft: Draft::default(),
        }
    }

    /// Consumes one chunk of received bytes and returns every request it
    /// completed, in arrival order, plus the error that stopped parsing, if
    /// any. Requests completed before a malformed one still come back so the
    /// connection can answer them before reporting the failure. Chunk
    /// boundaries carry no meaning: the same byte stream yields the same
    /// requests however it is split.
    pub fn advance(&mut self, chunk: &[u8]) -> (Vec<Request>, Option<ParseError>) {
        let mut complete = Vec::new();
        let error = self.drive(chunk, &mut complete).err();
        (complete, error)
    }

    fn drive(&mut self, mut chunk: &[u8], complete: &mut Vec<Request>) -> Result<(), ParseError> {
        loop {
            match self.state {
                State::Body { remaining } => {
                    let mut remaining = remaining;

                    // Body bytes that arrived with the headers are still in
                    // the framer; drain those first, then read directly.
                    let buffered = self.framer.take_raw(remaining);
                    remaining -= buffered.len();
                    self.draft.body.extend_from_slice(&buffered);

                    let n = remaining.min(chunk.len());
                    self.draft.body.extend_from_slice(&chunk[..n]);
                    chunk = &chunk[n..];
                    remaining -= n;

                    if remaining == 0 {
                        complete.push(self.finish());
                        self.state = State::StartLine;
                        continue;
                    }
                    self.state = State::Body { remaining };
                    break;
                }
                State::StartLine | State::Headers => {
                    if let Some(line) = self.framer.next_line() {
                        if let Some(request) = self.handle_line(line)? {
                            complete.push(request);
                        }
                        continue;
                    }
                    if chunk.is_empty() {
                        break;
                    }
                    let n = self.framer.feed(chunk)?;
                    chunk = &chunk[n..];
                }
            }
        }

        Ok(())
    }

    fn handle_line(&mut self, line: Vec<u8>) -> Result<Option<Request>, ParseError> {
        match self.state {
            State::StartLine => {
                let text = String::from_utf8(line)
                    .map_err(|e| ParseError::BadStartLine(format!("{e}")))?;
                if text.is_empty() {
                    // Tolerate a stray CRLF between pipelined requests.
                    return Ok(None);
                }
                self.parse_start_line(&text)?;
                self.state = State::Headers;
                Ok(None)
            }
            State::Headers => {
                let text =
                    String::from_utf8(line).map_err(|e| ParseError::BadHeader(format!("{e}")))?;
                if !text.is_empty() {
                    self.parse_header_line(&text)?;
                    return Ok(None);
                }
                // Blank line: headers done, read the body if one was declared.
                let remaining = self.declared_content_length()?;
                if remaining > self.max_body_len {
                    return Err(ParseError::BodyTooLarge(remaining));
                }
                if remaining > 0 {
                    // The declared length is peer-controlled; allocate as
                    // bytes actually arrive, not up front.
                    self.draft.body.reserve(remaining.min(BODY_RESERVE));
                    self.state = State::Body { remaining };
                    Ok(None)
                } else {
                    self.state = State::StartLine;
                    Ok(Some(self.finish()))
                }
            }
            State::Body { .. } => unreachable!("body bytes are not line-framed"),
        }
    }

    fn parse_start_line(&mut self, text: &str) -> Result<(), ParseError> {
        let mut parts = text.split_whitespace();
        let (Some(method), Some(uri), Some(version), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::BadStartLine(text.to_string()));
        };

        if version != "HTTP/1.1" && version != "HTTP/1.0" {
            return Err(ParseError::BadVersion(version.to_string()));
        }
        if !uri::validate_uri(uri) {
            return Err(ParseError::BadUri(uri.to_string()));
        }

        self.draft.method = Some(Method::from_token(method));
        self.draft.uri = uri.to_string();
        self.draft.version = version.to_string();
        Ok(())
    }

    fn parse_header_line(&mut self, text: &str) -> Result<(), ParseError> {
        let (key, value) = text
            .split_once(':')
            .ok_or_else(|| ParseError::BadHeader(text.to_string()))?;
        let key = key.trim();
        if !uri::is_valid_header_name(key) {
            return Err(ParseError::BadHeader(text.to_string()));
        }
        self.draft.headers.insert(key, value.trim());
        Ok(())
    }

    fn declared_content_length(&self) -> Result<usize, ParseError> {
        match self.draft.headers.get("content-length") {
            None => Ok(0),
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ParseError::BadContentLength(v.to_string())),
        }
    }

    fn finish(&mut self) -> Request {
        let draft = std::mem::take(&mut self.draft);
        Request {
            method: draft.method.unwrap_or(Method::INVALID),
            uri: draft.uri,
            version: draft.version,
            headers: draft.headers,
            body: Bytes::from(draft.body),
        }
    }
}

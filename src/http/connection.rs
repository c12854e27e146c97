use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::parser::RequestParser;
use crate::http::reply::Reply;
use crate::http::writer::ReplyWriter;
use crate::router::Session;

const READ_CHUNK: usize = 4096;

/// One live client connection: the socket, its parser state, and lifecycle.
///
/// A connection is paired with exactly one [`Session`] for its whole life.
/// Reads, parsing, dispatch and writes all run sequentially on the
/// connection's task, so there is never more than one outstanding read or
/// write per connection.
pub struct Connection {
    stream: TcpStream,
    parser: RequestParser,
    closed: bool,
}

impl Connection {
    pub fn new(stream: TcpStream, config: &Config) -> Self {
        Self {
            stream,
            parser: RequestParser::new(config.max_line_len, config.max_body_len),
            closed: false,
        }
    }

    /// Drives the connection until the peer disconnects, a protocol error
    /// occurs, or a handled request asks for the connection to close.
    ///
    /// Validation failures answer 400 and close; framing and transport
    /// failures close without a response.
    pub async fn run(&mut self, session: &Session) -> anyhow::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];

        while !self.closed {
            let n = self.stream.read(&mut chunk).await?;
            if n == 0 {
                // Peer closed.
                self.close().await;
                break;
            }

            let (requests, error) = self.parser.advance(&chunk[..n]);

            // Requests that completed before a malformed one still get their
            // replies, in arrival order, before the failure is reported.
            for request in requests {
                let keep_alive = request.keep_alive();
                let reply = session.dispatch(&request);
                self.send(&reply).await?;

                if !keep_alive {
                    self.close().await;
                    break;
                }
            }

            match error {
                None => {}
                Some(e) if e.is_fatal() => {
                    self.close().await;
                    return Err(e.into());
                }
                Some(e) => {
                    tracing::warn!("rejecting request: {e}");
                    self.send(&Reply::bad_request()).await?;
                    self.close().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Writes one reply to the peer. A no-op once the connection is closed.
    pub async fn send(&mut self, reply: &Reply) -> anyhow::Result<()> {
        if self.closed {
            return Ok(());
        }
        ReplyWriter::new(reply).write_to_stream(&mut self.stream).await
    }

    /// Shuts the connection down. Idempotent: calling it again, or after the
    /// peer already disconnected, has no further effect.
    pub async fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            let _ = self.stream.shutdown().await;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::reply::Reply;

/// Serializes a reply once and drives it onto the stream, handling partial
/// writes until every byte is on the wire.
pub struct ReplyWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ReplyWriter {
    pub fn new(reply: &Reply) -> Self {
        Self {
            buffer: reply.to_bytes(),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

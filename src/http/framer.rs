use std::collections::VecDeque;

/// Framing failures are fatal to the connection: the peer sent a line the
/// buffer cannot hold, so no response is written and the socket is closed.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("line exceeds buffer capacity of {0} bytes")]
    LineTooLong(usize),
}

/// Bounded line framer.
///
/// Buffers incoming bytes in a ring of fixed capacity and hands them back out
/// either as complete lines (`next_line`) or as raw bytes (`take_raw`, used
/// for length-delimited bodies). Consumed bytes are never re-emitted.
#[derive(Debug)]
pub struct LineFramer {
    buf: VecDeque<u8>,
    capacity: usize,
}

impl LineFramer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends as many bytes from `chunk` as fit and returns how many were
    /// accepted. Fails iff the buffer is already full and holds no line-feed
    /// delimiter: the pending line can never complete.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<usize, FrameError> {
        let free = self.capacity - self.buf.len();
        if free == 0 && !chunk.is_empty() {
            if self.buf.iter().any(|&b| b == b'\n') {
                return Ok(0);
            }
            return Err(FrameError::LineTooLong(self.capacity));
        }
        let n = free.min(chunk.len());
        self.buf.extend(&chunk[..n]);
        Ok(n)
    }

    /// Extracts the next complete line, if any: the bytes up to and excluding
    /// the line feed, with one immediately preceding carriage return
    /// stripped. The line and its delimiter are consumed.
    pub fn next_line(&mut self) -> Option<Vec<u8>> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(line)
    }

    /// Drains up to `max` buffered bytes verbatim, bypassing line framing.
    /// Body reads use this for bytes that arrived together with the headers.
    pub fn take_raw(&mut self, max: usize) -> Vec<u8> {
        let n = max.min(self.buf.len());
        self.buf.drain(..n).collect()
    }

    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

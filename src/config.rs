/// Server configuration, supplied programmatically by the embedding
/// application. There is no config file, CLI or environment surface.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to, e.g. "127.0.0.1:8080".
    pub listen_addr: String,
    /// Capacity of the per-connection line buffer. A header or request line
    /// longer than this is a fatal framing error.
    pub max_line_len: usize,
    /// Largest Content-Length a request may declare. Larger declarations are
    /// answered with 400 before any body byte is buffered.
    pub max_body_len: usize,
}

impl Config {
    pub fn new(listen_addr: impl Into<String>) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_line_len: 8192,
            max_body_len: 16 * 1024 * 1024,
        }
    }
}

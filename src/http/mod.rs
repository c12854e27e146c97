//! HTTP protocol implementation.
//!
//! This module implements an HTTP/1.1 server core with support for
//! keep-alive connections and request pipelining.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`framer`**: Bounded line framer turning the raw byte stream into lines
//! - **`parser`**: Incremental request parser built over the framer
//! - **`request`**: Immutable HTTP request representation
//! - **`reply`**: HTTP reply with ordered header lines and a content buffer
//! - **`writer`**: Serializes and writes replies to the client
//! - **`connection`**: The per-connection read/dispatch/write loop
//! - **`uri`**: URI validation and percent-encoding helpers
//!
//! # Request lifecycle
//!
//! ```text
//!   bytes ──▶ LineFramer ──▶ RequestParser ──▶ Request
//!                                                │
//!                                                ▼
//!   peer ◀── ReplyWriter ◀── Reply ◀──── Session dispatch
//! ```
//!
//! Each completed request is handed to the connection's [`Session`] for
//! routing; the resulting [`Reply`] is written back on the same stream and
//! the parser resets for the next request unless the exchange closed the
//! connection.
//!
//! [`Session`]: crate::router::Session
//! [`Reply`]: crate::http::reply::Reply

pub mod connection;
pub mod framer;
pub mod parser;
pub mod reply;
pub mod request;
pub mod uri;
pub mod writer;

//! Beacon - Embeddable HTTP/JSON-RPC Server Core
//!
//! Connection handling, line framing, HTTP parsing, longest-prefix routing
//! and JSON-RPC dispatch for embedding applications.

pub mod config;
pub mod http;
pub mod router;
pub mod rpc;
pub mod server;

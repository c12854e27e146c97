//! JSON-RPC dispatch
//!
//! This module implements a name-to-callback method registry dispatching
//! generic JSON documents, plus the HTTP bridge route that carries RPC
//! payloads over POST requests.

pub mod bridge;
pub mod result;
pub mod server;

pub use bridge::RpcRoute;
pub use result::{RpcError, RpcResult};
pub use server::RpcServer;

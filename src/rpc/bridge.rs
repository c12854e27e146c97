use std::sync::Arc;

use serde_json::Value;

use crate::http::reply::{Reply, Status};
use crate::http::request::{Method, Request};
use crate::router::{Route, Session};
use crate::rpc::server::RpcServer;

const RPC_CONTENT_TYPE: &str = "application/json";

/// The HTTP bridge for RPC: a [`Route`] that decodes POSTed JSON payloads,
/// forwards them to the bound [`RpcServer`], and writes the encoded response
/// document back.
///
/// The registry is shared: sessions are per-connection, but every bridge
/// created for the same `Arc<RpcServer>` dispatches into one method table.
pub struct RpcRoute {
    mount_point: String,
    rpc: Arc<RpcServer>,
}

impl RpcRoute {
    pub fn new(mount_point: impl Into<String>, rpc: Arc<RpcServer>) -> Self {
        Self {
            mount_point: mount_point.into(),
            rpc,
        }
    }

    fn declares_json(request: &Request) -> bool {
        request
            .header("Content-Type")
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().eq_ignore_ascii_case(RPC_CONTENT_TYPE))
            .unwrap_or(false)
    }
}

impl Route for RpcRoute {
    fn mount_point(&self) -> &str {
        &self.mount_point
    }

    fn handle(&self, _session: &Session, request: &Request) -> Reply {
        if request.method != Method::POST {
            return Reply::method_not_allowed();
        }
        if !Self::declares_json(request) {
            tracing::warn!("rpc request without {RPC_CONTENT_TYPE} content type");
            return Reply::bad_request();
        }

        let document: Value = match serde_json::from_slice(&request.body) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("undecodable rpc payload: {e}");
                return Reply::bad_request();
            }
        };

        let mut reply = Reply::new(Status::Ok);
        reply.add_header("Content-Type", RPC_CONTENT_TYPE);
        if let Some(response) = self.rpc.request(&document) {
            reply.append_content(response.to_string().as_bytes());
        }
        reply
    }
}

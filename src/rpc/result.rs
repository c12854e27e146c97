use serde_json::{Value, json};

/// Standard JSON-RPC error code for a missing or unregistered method.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Standard JSON-RPC error code for unusable parameters.
pub const INVALID_PARAMS: i64 = -32602;
/// Standard JSON-RPC error code for a callback failure.
pub const INTERNAL_ERROR: i64 = -32603;

/// An error reported by an RPC method, carried back to the caller as an
/// error response document. Callback failures never cross the RPC server
/// boundary as anything else.
#[derive(Debug, Clone, thiserror::Error)]
#[error("rpc error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn method_not_found(name: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("method not found: {name}"))
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, detail)
    }
}

/// The outcome of one dispatched RPC call: a success value or an error, plus
/// the request identifier echoed back unchanged.
///
/// An absent identifier marks the call as a notification, which produces no
/// response document at all.
#[derive(Debug)]
pub struct RpcResult {
    outcome: Result<Value, RpcError>,
    id: Option<Value>,
}

impl RpcResult {
    pub fn new(outcome: Result<Value, RpcError>, id: Option<Value>) -> Self {
        Self { outcome, id }
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Builds the response document, or None for a notification.
    pub fn into_document(self) -> Option<Value> {
        let id = self.id?;
        Some(match self.outcome {
            Ok(value) => json!({ "result": value, "id": id }),
            Err(e) => json!({
                "error": { "code": e.code, "message": e.message },
                "id": id,
            }),
        })
    }
}

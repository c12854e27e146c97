use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::rpc::result::{RpcError, RpcResult};

/// Signature of a registered RPC method: takes the `params` document, returns
/// a result document or an error to report back to the caller.
pub type RpcCallback = dyn Fn(&Value) -> Result<Value, RpcError> + Send + Sync;

/// A name-to-callback RPC method registry.
///
/// Accepts a generic JSON document holding either a single request object or
/// a batch array, dispatches each element to its registered callback, and
/// produces the response document. Lookup failures and callback errors are
/// converted into error responses at this boundary; they never propagate.
#[derive(Default)]
pub struct RpcServer {
    methods: HashMap<String, Box<RpcCallback>>,
}

impl RpcServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a method under `name`, replacing any previous registration
    /// with the same name.
    pub fn register_method<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&Value) -> Result<Value, RpcError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(callback));
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Dispatches a request document and builds the response document.
    ///
    /// The response mirrors the input shape: a single request object yields a
    /// single response object (or None for a notification); an array yields
    /// an array holding one response per element that carried an `id`, in the
    /// same relative order.
    pub fn request(&self, document: &Value) -> Option<Value> {
        match document {
            Value::Array(elements) => {
                let responses = elements
                    .iter()
                    .filter_map(|element| self.dispatch_one(element))
                    .collect();
                Some(Value::Array(responses))
            }
            _ => self.dispatch_one(document),
        }
    }

    fn dispatch_one(&self, element: &Value) -> Option<Value> {
        let id = element.get("id").cloned();
        let params = element
            .get("params")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        let outcome = match element.get("method").and_then(Value::as_str) {
            None => Err(RpcError::method_not_found("<none>")),
            Some(name) => match self.methods.get(name) {
                None => {
                    tracing::debug!(method = name, "rpc method not found");
                    Err(RpcError::method_not_found(name))
                }
                Some(callback) => callback(&params),
            },
        };

        RpcResult::new(outcome, id).into_document()
    }
}

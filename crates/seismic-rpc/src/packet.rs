//! JSON-RPC 2.0 request/response objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A JSON-RPC 2.0 request object. `id` is always present and always a
/// number, since this client never needs notifications.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    method: String,
    params: Value,
    id: u64,
}

impl RpcRequest {
    /// Builds a request for `method` with `params` and `id`.
    pub fn new(method: impl Into<String>, params: Value, id: u64) -> Self {
        Self { jsonrpc: "2.0", method: method.into(), params, id }
    }
}

/// A JSON-RPC 2.0 response object: either a `result` or an `error`, never
/// both.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    /// The id echoed back from the request.
    pub id: u64,
    /// The successful result, if present.
    #[serde(default)]
    pub result: Option<Value>,
    /// The error object, if present.
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Deserialize, Error)]
#[error("rpc error {code}: {message}")]
pub struct RpcError {
    /// The error code.
    pub code: i64,
    /// The error message.
    pub message: String,
    /// Any additional error data the node attached.
    #[serde(default)]
    pub data: Option<Value>,
}

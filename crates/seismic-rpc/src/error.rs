use crate::packet::RpcError;
use thiserror::Error;

/// Errors raised sending or receiving a JSON-RPC call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request itself failed (connection, TLS, timeout, non-2xx
    /// status).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The response body wasn't valid JSON-RPC.
    #[error("failed to decode rpc response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The node returned a JSON-RPC error object.
    #[error(transparent)]
    Rpc(#[from] RpcError),
    /// The response had neither a `result` nor an `error` field.
    #[error("rpc response had neither a result nor an error")]
    EmptyResponse,
}

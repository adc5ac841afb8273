//! The [`SeismicTransport`] trait and its HTTP implementation.

use crate::{
    error::TransportError,
    packet::{RpcRequest, RpcResponse},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

/// Something that can carry out a single JSON-RPC call. Implemented for
/// HTTP today; a websocket or IPC transport would implement the same
/// trait.
#[async_trait]
pub trait SeismicTransport: Send + Sync {
    /// Sends `method(params)` and returns the decoded `result` value.
    async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError>;
}

/// An HTTP JSON-RPC transport backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    next_id: std::sync::Arc<AtomicU64>,
}

impl HttpTransport {
    /// Builds a transport that POSTs JSON-RPC requests to `url`.
    pub fn new(url: Url) -> Self {
        Self { client: reqwest::Client::new(), url, next_id: Default::default() }
    }
}

#[async_trait]
impl SeismicTransport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, id);

        tracing::debug!(method, id, "sending rpc request");

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let response: RpcResponse = serde_json::from_slice(&body)?;

        match (response.result, response.error) {
            (Some(result), _) => Ok(result),
            (None, Some(error)) => Err(error.into()),
            (None, None) => Err(TransportError::EmptyResponse),
        }
    }
}

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::utils::Result;

/// A single JSON-RPC call: method name plus positional params.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self { method: method.into(), params }
    }
}

/// Request/response transport the Hardhat facade dispatches through.
///
/// Implementations own connection handling and response decoding; errors are
/// surfaced as-is to the caller of the facade.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send one request and return the decoded `result` member.
    async fn send(&self, request: RpcRequest) -> Result<Value>;
}

#[async_trait]
impl<T: RpcTransport> RpcTransport for Arc<T> {
    async fn send(&self, request: RpcRequest) -> Result<Value> {
        (**self).send(request).await
    }
}

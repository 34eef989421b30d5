//! In-memory transport for tests: records requests, replays canned results.

use async_trait::async_trait;
use jsonrpsee::core::ClientError;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;

use crate::transport::traits::{RpcRequest, RpcTransport};
use crate::utils::{HardhatError, Result};

#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RpcRequest>>,
    responses: Mutex<VecDeque<Value>>,
    failure: Option<String>,
}

impl MockTransport {
    /// Replies `null` to everything unless responses are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every call with `ClientError::Custom(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    /// Queue a result for the next call.
    pub fn push_response(&self, v: Value) {
        self.responses.lock().push_back(v);
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().clone()
    }

    /// Most recent request, if any.
    pub fn last_request(&self) -> Option<RpcRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send(&self, request: RpcRequest) -> Result<Value> {
        self.requests.lock().push(request);
        if let Some(ref msg) = self.failure {
            return Err(HardhatError::Transport(ClientError::Custom(msg.clone())));
        }
        Ok(self.responses.lock().pop_front().unwrap_or(Value::Null))
    }
}

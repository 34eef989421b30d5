//! `jsonrpsee`-backed transports.
//!
//! `Endpoint::connect` picks HTTP or WebSocket from the URL scheme, the same
//! way a node operator would point a client at `http://127.0.0.1:8545` or
//! `ws://127.0.0.1:8545`.

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::traits::ToRpcParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::ws_client::{WsClient, WsClientBuilder};
use serde_json::value::RawValue;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::transport::traits::{RpcRequest, RpcTransport};
use crate::utils::{HardhatError, Result};

/// Positional params that always serialize as an array, `[]` included.
struct PositionalParams(Vec<Value>);

impl ToRpcParams for PositionalParams {
    fn to_rpc_params(self) -> std::result::Result<Option<Box<RawValue>>, serde_json::Error> {
        serde_json::value::to_raw_value(&self.0).map(Some)
    }
}

/// Adapts any `jsonrpsee` client to `RpcTransport`.
pub struct JsonRpcTransport<C> {
    client: C,
}

impl<C: ClientT + Send + Sync + 'static> JsonRpcTransport<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: ClientT + Send + Sync + 'static> RpcTransport for JsonRpcTransport<C> {
    async fn send(&self, request: RpcRequest) -> Result<Value> {
        debug!(method = %request.method, params = request.params.len(), "sending request");
        let RpcRequest { method, params } = request;
        match self.client.request::<Value, _>(&method, PositionalParams(params)).await {
            Ok(v) => Ok(v),
            Err(e) => {
                warn!(method = %method, error = %e, "request failed");
                Err(HardhatError::Transport(e))
            }
        }
    }
}

/// Transport selected from an endpoint URL.
pub enum Endpoint {
    Http(JsonRpcTransport<HttpClient>),
    Ws(JsonRpcTransport<WsClient>),
}

impl Endpoint {
    /// Build a client for `cfg.endpoint`. WebSocket endpoints connect eagerly;
    /// HTTP endpoints connect on first request.
    pub async fn connect(cfg: &ClientConfig) -> Result<Self> {
        let url = Url::parse(&cfg.endpoint)
            .map_err(|e| HardhatError::InvalidEndpoint(format!("{}: {}", cfg.endpoint, e)))?;
        let timeout = Duration::from_secs(cfg.request_timeout_secs);

        match url.scheme() {
            "http" | "https" => {
                let client = HttpClientBuilder::default()
                    .request_timeout(timeout)
                    .build(url.as_str())?;
                info!("using HTTP endpoint {}", url);
                Ok(Endpoint::Http(JsonRpcTransport::new(client)))
            }
            "ws" | "wss" => {
                let client = WsClientBuilder::default()
                    .request_timeout(timeout)
                    .build(url.as_str())
                    .await?;
                info!("connected to WebSocket endpoint {}", url);
                Ok(Endpoint::Ws(JsonRpcTransport::new(client)))
            }
            other => Err(HardhatError::InvalidEndpoint(format!(
                "unsupported scheme {:?} in {} (expected http, https, ws or wss)",
                other, cfg.endpoint
            ))),
        }
    }
}

#[async_trait]
impl RpcTransport for Endpoint {
    async fn send(&self, request: RpcRequest) -> Result<Value> {
        match self {
            Endpoint::Http(t) => t.send(request).await,
            Endpoint::Ws(t) => t.send(request).await,
        }
    }
}

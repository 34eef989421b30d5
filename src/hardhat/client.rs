use serde_json::{json, Value};
use tracing::trace;

use crate::hardhat::methods;
use crate::hardhat::types::ResetRequest;
use crate::transport::{RpcRequest, RpcTransport};
use crate::utils::{BlockNumberOrTag, Quantity, Result};

/// Typed access to Hardhat's debugging and chain-control RPC methods.
///
/// Cheap to share: wrap it in an `Arc` and call from as many tasks as needed.
/// Calls are independent; ordering between concurrent calls is whatever the
/// transport provides.
pub struct HardhatClient<T: RpcTransport> {
    transport: T,
}

impl<T: RpcTransport> HardhatClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        trace!(method, ?params, "hardhat call");
        self.transport.send(RpcRequest::new(method, params)).await
    }

    /// Send and discard the node's reply.
    async fn exec(&self, method: &str, params: Vec<Value>) -> Result<()> {
        self.call(method, params).await.map(|_| ())
    }

    /// Allow sending transactions from `address` without its private key.
    pub async fn impersonate_account(&self, address: &str) -> Result<()> {
        self.exec(methods::IMPERSONATE_ACCOUNT, vec![json!(address)]).await
    }

    pub async fn stop_impersonating_account(&self, address: &str) -> Result<()> {
        self.exec(methods::STOP_IMPERSONATING_ACCOUNT, vec![json!(address)]).await
    }

    /// Remove a pending transaction from the mempool.
    pub async fn drop_transaction(&self, tx_hash: &str) -> Result<()> {
        self.exec(methods::DROP_TRANSACTION, vec![json!(tx_hash)]).await
    }

    /// Set the balance of `address` in wei.
    pub async fn set_balance(&self, address: &str, balance: impl Into<Quantity>) -> Result<()> {
        let balance = balance.into().to_hex();
        self.exec(methods::SET_BALANCE, vec![json!(address), json!(balance)]).await
    }

    pub async fn set_block_gas_limit(&self, gas_limit: impl Into<Quantity>) -> Result<()> {
        let gas_limit = gas_limit.into().to_hex();
        self.exec(methods::SET_BLOCK_GAS_LIMIT, vec![json!(gas_limit)]).await
    }

    /// Read a storage slot. The node's result is returned untouched.
    pub async fn get_storage_at(
        &self,
        address: &str,
        position: impl Into<Quantity>,
        block: impl Into<BlockNumberOrTag>,
    ) -> Result<Value> {
        let params = vec![json!(address), json!(position.into()), json!(block.into())];
        self.call(methods::GET_STORAGE_AT, params).await
    }

    /// Mine `blocks` blocks, optionally `interval` seconds apart.
    pub async fn mine(&self, blocks: impl Into<Quantity>, interval: Option<Quantity>) -> Result<Value> {
        let mut params = vec![json!(blocks.into().to_hex())];
        if let Some(interval) = interval {
            params.push(json!(interval.to_hex()));
        }
        self.call(methods::MINE, params).await
    }

    /// Issues `hardhat_mine` with `block` as a raw JSON number.
    ///
    /// Unlike [`mine`](Self::mine) the argument is not hex encoded. That
    /// mismatch exists in the interface this client mirrors and is kept as-is.
    pub async fn mine_up_to(&self, block: u64) -> Result<Value> {
        self.call(methods::MINE, vec![json!(block)]).await
    }

    /// Reset the network.
    ///
    /// - no `url`: back to a fresh local chain (`block_number` is ignored)
    /// - `url` only: fork the latest block of `url`
    /// - `url` and `block_number`: fork `url` at that block
    pub async fn reset(&self, url: Option<&str>, block_number: Option<u64>) -> Result<()> {
        let params = match url {
            None => vec![],
            Some(url) => vec![serde_json::to_value(ResetRequest::fork(url, block_number))?],
        };
        self.exec(methods::RESET, params).await
    }

    /// Replace the bytecode at `address`. `code` is forwarded verbatim.
    pub async fn set_code(&self, address: &str, code: &str) -> Result<()> {
        self.exec(methods::SET_CODE, vec![json!(address), json!(code)]).await
    }

    pub async fn set_coinbase(&self, address: &str) -> Result<()> {
        self.exec(methods::SET_COINBASE, vec![json!(address)]).await
    }

    pub async fn set_next_block_base_fee_per_gas(&self, base_fee_per_gas: impl Into<Quantity>) -> Result<()> {
        let fee = base_fee_per_gas.into().to_hex();
        self.exec(methods::SET_NEXT_BLOCK_BASE_FEE_PER_GAS, vec![json!(fee)]).await
    }

    pub async fn set_nonce(&self, address: &str, nonce: impl Into<Quantity>) -> Result<()> {
        let nonce = nonce.into().to_hex();
        self.exec(methods::SET_NONCE, vec![json!(address), json!(nonce)]).await
    }

    /// Set PREVRANDAO for the next block; always sent as a full 32-byte word.
    pub async fn set_prev_randao(&self, prev_randao: impl Into<Quantity>) -> Result<()> {
        let prev_randao = prev_randao.into().to_padded_hex();
        self.exec(methods::SET_PREV_RANDAO, vec![json!(prev_randao)]).await
    }

    /// Write `value` into storage slot `index`. The value is padded to 32 bytes.
    pub async fn set_storage_at(
        &self,
        address: &str,
        index: impl Into<Quantity>,
        value: impl Into<Quantity>,
    ) -> Result<()> {
        let params = vec![
            json!(address),
            json!(index.into().to_hex()),
            json!(value.into().to_padded_hex()),
        ];
        self.exec(methods::SET_STORAGE_AT, params).await
    }

    /// Snapshot the chain; the node's snapshot id is returned untouched.
    pub async fn take_snapshot(&self) -> Result<Value> {
        self.call(methods::TAKE_SNAPSHOT, vec![]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use crate::utils::HardhatError;
    use jsonrpsee::core::ClientError;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    const TX: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

    fn client() -> HardhatClient<MockTransport> {
        HardhatClient::new(MockTransport::new())
    }

    fn last(c: &HardhatClient<MockTransport>) -> RpcRequest {
        c.transport().last_request().expect("no request recorded")
    }

    #[tokio::test]
    async fn test_passthrough_calls_forward_argument_unchanged() {
        let c = client();

        assert_ok!(c.impersonate_account(ADDR).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_impersonateAccount", vec![json!(ADDR)]));

        assert_ok!(c.stop_impersonating_account(ADDR).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_stopImpersonatingAccount", vec![json!(ADDR)]));

        assert_ok!(c.drop_transaction(TX).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_dropTransaction", vec![json!(TX)]));

        assert_ok!(c.set_coinbase(ADDR).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_setCoinbase", vec![json!(ADDR)]));

        assert_ok!(c.set_code(ADDR, "0x6080").await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_setCode", vec![json!(ADDR), json!("0x6080")]));
    }

    #[tokio::test]
    async fn test_numeric_calls_send_minimal_hex() {
        let c = client();

        let wei: Quantity = "1000000000000000000".parse().unwrap();
        assert_ok!(c.set_balance(ADDR, wei).await);
        assert_eq!(
            last(&c),
            RpcRequest::new("hardhat_setBalance", vec![json!(ADDR), json!("0xde0b6b3a7640000")])
        );

        assert_ok!(c.set_block_gas_limit(30_000_000u64).await);
        assert_eq!(last(&c), RpcRequest::new("evm_setBlockGasLimit", vec![json!("0x1c9c380")]));

        assert_ok!(c.set_next_block_base_fee_per_gas(0u64).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_setNextBlockBaseFeePerGas", vec![json!("0x0")]));

        assert_ok!(c.set_nonce(ADDR, 16u64).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_setNonce", vec![json!(ADDR), json!("0x10")]));
    }

    #[tokio::test]
    async fn test_storage_slot_fields_are_padded_to_32_bytes() {
        let c = client();

        assert_ok!(c.set_storage_at(ADDR, 1u64, 255u64).await);
        let req = last(&c);
        assert_eq!(req.method, "hardhat_setStorageAt");
        assert_eq!(
            req.params,
            vec![
                json!(ADDR),
                json!("0x1"),
                json!("0x00000000000000000000000000000000000000000000000000000000000000ff"),
            ]
        );

        assert_ok!(c.set_prev_randao(0u64).await);
        let req = last(&c);
        assert_eq!(req.method, "hardhat_setPrevRandao");
        assert_eq!(req.params, vec![json!(format!("0x{}", "0".repeat(64)))]);
    }

    #[tokio::test]
    async fn test_mine_shapes() {
        let c = client();

        assert_ok!(c.mine(5u64, None).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_mine", vec![json!("0x5")]));

        assert_ok!(c.mine(5u64, Some("3".parse().unwrap())).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_mine", vec![json!("0x5"), json!("0x3")]));

        // raw number, not hex
        assert_ok!(c.mine_up_to(100).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_mine", vec![json!(100)]));
    }

    #[tokio::test]
    async fn test_reset_shapes() {
        let c = client();

        assert_ok!(c.reset(None, None).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_reset", vec![]));

        assert_ok!(c.reset(None, Some(100)).await);
        assert_eq!(last(&c), RpcRequest::new("hardhat_reset", vec![]));

        assert_ok!(c.reset(Some("https://eth.example"), None).await);
        assert_eq!(
            last(&c),
            RpcRequest::new("hardhat_reset", vec![json!({"forking": {"jsonRpcUrl": "https://eth.example"}})])
        );

        assert_ok!(c.reset(Some("https://eth.example"), Some(100)).await);
        assert_eq!(
            last(&c),
            RpcRequest::new(
                "hardhat_reset",
                vec![json!({"forking": {"jsonRpcUrl": "https://eth.example", "blockNumber": 100}})]
            )
        );
    }

    #[tokio::test]
    async fn test_query_results_are_returned_unmodified() {
        let c = client();
        let slot = json!("0x00000000000000000000000000000000000000000000000000000000000000ff");
        c.transport().push_response(slot.clone());
        c.transport().push_response(json!("0x1"));
        c.transport().push_response(json!({"unexpected": ["shape", 1]}));

        let got = c.get_storage_at(ADDR, 0u64, BlockNumberOrTag::Latest).await.unwrap();
        assert_eq!(got, slot);
        assert_eq!(
            last(&c),
            RpcRequest::new("hardhat_getStorageAt", vec![json!(ADDR), json!("0x0"), json!("latest")])
        );

        assert_eq!(c.take_snapshot().await.unwrap(), json!("0x1"));
        assert_eq!(last(&c), RpcRequest::new("hardhat_takeSnapshot", vec![]));

        assert_eq!(c.take_snapshot().await.unwrap(), json!({"unexpected": ["shape", 1]}));
    }

    #[tokio::test]
    async fn test_get_storage_at_block_number() {
        let c = client();
        assert_ok!(c.get_storage_at(ADDR, 2u64, 100u64).await);
        assert_eq!(last(&c).params, vec![json!(ADDR), json!("0x2"), json!("0x64")]);
    }

    fn assert_propagated(res: Result<impl std::fmt::Debug>) {
        let err = assert_err!(res);
        match err {
            HardhatError::Transport(ClientError::Custom(msg)) => assert_eq!(msg, "node unreachable"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failures_propagate_for_every_method() {
        let c = HardhatClient::new(MockTransport::failing("node unreachable"));

        assert_propagated(c.impersonate_account(ADDR).await);
        assert_propagated(c.stop_impersonating_account(ADDR).await);
        assert_propagated(c.drop_transaction(TX).await);
        assert_propagated(c.set_balance(ADDR, 1u64).await);
        assert_propagated(c.set_block_gas_limit(1u64).await);
        assert_propagated(c.get_storage_at(ADDR, 0u64, BlockNumberOrTag::Latest).await);
        assert_propagated(c.mine(1u64, None).await);
        assert_propagated(c.mine_up_to(10).await);
        assert_propagated(c.reset(None, None).await);
        assert_propagated(c.reset(Some("http://fork"), Some(1)).await);
        assert_propagated(c.set_code(ADDR, "0x00").await);
        assert_propagated(c.set_coinbase(ADDR).await);
        assert_propagated(c.set_next_block_base_fee_per_gas(1u64).await);
        assert_propagated(c.set_nonce(ADDR, 1u64).await);
        assert_propagated(c.set_prev_randao(1u64).await);
        assert_propagated(c.set_storage_at(ADDR, 0u64, 1u64).await);
        assert_propagated(c.take_snapshot().await);

        // one request per call, no retries
        assert_eq!(c.transport().requests().len(), 17);
    }

    #[tokio::test]
    async fn test_shared_client_across_tasks() {
        let c = Arc::new(client());
        let calls = (0..8u64).map(|i| {
            let c = c.clone();
            tokio::spawn(async move { c.set_nonce(ADDR, i).await })
        });
        for res in futures::future::join_all(calls).await {
            assert_ok!(res.unwrap());
        }

        let nonces: Vec<Value> = c.transport().requests().into_iter().map(|r| r.params[1].clone()).collect();
        assert_eq!(nonces.len(), 8);
        for i in 0..8u64 {
            assert!(nonces.contains(&json!(format!("0x{:x}", i))));
        }
    }
}

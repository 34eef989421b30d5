use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

use crate::config::ClientConfig;
use crate::hardhat::HardhatClient;
use crate::transport::{Endpoint, RpcTransport};
use crate::utils::{init_logging, BlockNumberOrTag, Quantity};

/// CLI for driving a Hardhat node.
#[derive(Parser, Debug)]
#[clap(name = "hardhat", version)]
pub struct Cli {
    /// Path to the client config file
    #[clap(long, default_value = "hardhat.toml")]
    pub config: PathBuf,

    /// Node endpoint; overrides `endpoint` from the config file
    #[clap(long)]
    pub rpc_url: Option<String>,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

// Quantity arguments accept decimal or 0x-prefixed hex.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Cmd {
    /// Send transactions as ADDRESS without its key
    Impersonate { address: String },
    StopImpersonating { address: String },
    /// Remove a pending transaction from the mempool
    DropTx { tx_hash: String },
    /// Set an account balance (wei)
    SetBalance { address: String, balance: Quantity },
    SetBlockGasLimit { gas_limit: Quantity },
    /// Read a storage slot
    GetStorageAt {
        address: String,
        position: Quantity,
        /// block number or tag (latest, earliest, pending, safe, finalized)
        #[clap(long, default_value = "latest")]
        block: BlockNumberOrTag,
    },
    /// Mine one or more blocks
    Mine {
        #[clap(default_value = "1")]
        blocks: Quantity,
        /// seconds between mined blocks
        #[clap(long)]
        interval: Option<Quantity>,
    },
    MineUpTo { block: u64 },
    /// Reset the chain, optionally forking a remote network
    Reset {
        #[clap(long)]
        fork_url: Option<String>,
        #[clap(long, requires = "fork_url")]
        fork_block: Option<u64>,
    },
    SetCode { address: String, code: String },
    SetCoinbase { address: String },
    SetNextBlockBaseFee { base_fee_per_gas: Quantity },
    SetNonce { address: String, nonce: Quantity },
    SetPrevRandao { prev_randao: Quantity },
    /// Write a 32-byte value into a storage slot
    SetStorageAt { address: String, index: Quantity, value: Quantity },
    /// Take a chain snapshot and print its id
    Snapshot,
}

/// Run one command. Query commands yield the node's result.
pub async fn execute<T: RpcTransport>(client: &HardhatClient<T>, cmd: Cmd) -> crate::utils::Result<Option<Value>> {
    match cmd {
        Cmd::Impersonate { address } => client.impersonate_account(&address).await.map(|_| None),
        Cmd::StopImpersonating { address } => client.stop_impersonating_account(&address).await.map(|_| None),
        Cmd::DropTx { tx_hash } => client.drop_transaction(&tx_hash).await.map(|_| None),
        Cmd::SetBalance { address, balance } => client.set_balance(&address, balance).await.map(|_| None),
        Cmd::SetBlockGasLimit { gas_limit } => client.set_block_gas_limit(gas_limit).await.map(|_| None),
        Cmd::GetStorageAt { address, position, block } => {
            client.get_storage_at(&address, position, block).await.map(Some)
        }
        Cmd::Mine { blocks, interval } => client.mine(blocks, interval).await.map(Some),
        Cmd::MineUpTo { block } => client.mine_up_to(block).await.map(Some),
        Cmd::Reset { fork_url, fork_block } => client.reset(fork_url.as_deref(), fork_block).await.map(|_| None),
        Cmd::SetCode { address, code } => client.set_code(&address, &code).await.map(|_| None),
        Cmd::SetCoinbase { address } => client.set_coinbase(&address).await.map(|_| None),
        Cmd::SetNextBlockBaseFee { base_fee_per_gas } => {
            client.set_next_block_base_fee_per_gas(base_fee_per_gas).await.map(|_| None)
        }
        Cmd::SetNonce { address, nonce } => client.set_nonce(&address, nonce).await.map(|_| None),
        Cmd::SetPrevRandao { prev_randao } => client.set_prev_randao(prev_randao).await.map(|_| None),
        Cmd::SetStorageAt { address, index, value } => {
            client.set_storage_at(&address, index, value).await.map(|_| None)
        }
        Cmd::Snapshot => client.take_snapshot().await.map(Some),
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::load_or_default(&cli.config)?;
    if let Some(url) = cli.rpc_url {
        config.endpoint = url;
    }
    init_logging(&config.log_filter);
    info!("using node at {}", config.endpoint);

    let client = HardhatClient::new(Endpoint::connect(&config).await?);
    match execute(&client, cli.cmd).await? {
        Some(v) => println!("{}", serde_json::to_string_pretty(&v)?),
        None => println!("ok"),
    }
    Ok(())
}

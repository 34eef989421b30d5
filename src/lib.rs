//! Typed client for Hardhat network control methods.
//!
//! ```no_run
//! use hardhat_rpc::{ClientConfig, Endpoint, HardhatClient};
//!
//! # async fn demo() -> hardhat_rpc::Result<()> {
//! let node = Endpoint::connect(&ClientConfig::default()).await?;
//! let hardhat = HardhatClient::new(node);
//! hardhat.impersonate_account("0x5FbDB2315678afecb367f032d93F642f64180aa3").await?;
//! hardhat.mine(10u64, None).await?;
//! let snapshot = hardhat.take_snapshot().await?;
//! # let _ = snapshot;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod hardhat;
pub mod transport;
pub mod utils;

pub use config::ClientConfig;
pub use hardhat::HardhatClient;
pub use transport::{Endpoint, JsonRpcTransport, RpcRequest, RpcTransport};
pub use utils::{BlockNumberOrTag, HardhatError, Quantity, Result};

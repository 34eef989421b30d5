//! Hardhat network control methods.
//!
//! `HardhatClient` wraps any `RpcTransport` and exposes one async method per
//! `hardhat_*` / `evm_*` call. It formats parameters and nothing else: no
//! validation, retries, or error mapping happen here.

pub mod client;
pub mod methods;
pub mod types;

pub use client::HardhatClient;
pub use types::{Forking, ResetRequest};

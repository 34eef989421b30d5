use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::utils::{HardhatError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8545";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Client configuration, usually read from `hardhat.toml`.
///
/// ```toml
/// endpoint = "http://127.0.0.1:8545"
/// request_timeout_secs = 60
/// log_filter = "hardhat_rpc=debug"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// JSON-RPC endpoint of the Hardhat node (http, https, ws or wss).
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| HardhatError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&data).map_err(|e| match e {
            HardhatError::Config(msg) => HardhatError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Load config from `path` if it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| HardhatError::Config(e.to_string()))
    }
}

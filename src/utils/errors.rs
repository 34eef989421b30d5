use thiserror::Error;

/// Unified error type for the Hardhat client
#[derive(Error, Debug)]
pub enum HardhatError {
    /// Anything the JSON-RPC transport reports: connection failures, node-side
    /// errors, undecodable responses.
    #[error("Transport error: {0}")]
    Transport(#[from] jsonrpsee::core::ClientError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, HardhatError>;

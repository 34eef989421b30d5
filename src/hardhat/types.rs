use serde::Serialize;

/// `hardhat_reset` options object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResetRequest {
    pub forking: Forking,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forking {
    pub json_rpc_url: String,
    /// Sent as a plain JSON number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

impl ResetRequest {
    pub fn fork(url: impl Into<String>, block_number: Option<u64>) -> Self {
        Self { forking: Forking { json_rpc_url: url.into(), block_number } }
    }
}

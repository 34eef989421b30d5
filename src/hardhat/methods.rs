//! Wire method names.

pub const IMPERSONATE_ACCOUNT: &str = "hardhat_impersonateAccount";
pub const STOP_IMPERSONATING_ACCOUNT: &str = "hardhat_stopImpersonatingAccount";
pub const DROP_TRANSACTION: &str = "hardhat_dropTransaction";
pub const SET_BALANCE: &str = "hardhat_setBalance";
pub const SET_BLOCK_GAS_LIMIT: &str = "evm_setBlockGasLimit";
pub const GET_STORAGE_AT: &str = "hardhat_getStorageAt";
pub const MINE: &str = "hardhat_mine";
pub const RESET: &str = "hardhat_reset";
pub const SET_CODE: &str = "hardhat_setCode";
pub const SET_COINBASE: &str = "hardhat_setCoinbase";
pub const SET_NEXT_BLOCK_BASE_FEE_PER_GAS: &str = "hardhat_setNextBlockBaseFeePerGas";
pub const SET_NONCE: &str = "hardhat_setNonce";
pub const SET_PREV_RANDAO: &str = "hardhat_setPrevRandao";
pub const SET_STORAGE_AT: &str = "hardhat_setStorageAt";
pub const TAKE_SNAPSHOT: &str = "hardhat_takeSnapshot";

//! Utility module: errors, logging, and the quantity codec.

pub mod errors;
pub mod logging;
pub mod quantity;

pub use errors::{HardhatError, Result};
pub use logging::init_logging;
pub use quantity::{pad_left, BlockNumberOrTag, Quantity, STORAGE_SLOT_HEX_WIDTH};

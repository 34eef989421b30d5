//! Quantity codec for Hardhat control methods.
//!
//! Hardhat expects numeric parameters as `0x`-prefixed hex with no leading
//! zeros, except for fields that occupy a full storage slot, which must be
//! left-padded to 32 bytes.

use alloy_primitives::U256;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::HardhatError;

/// Hex digits in a 256-bit storage slot.
pub const STORAGE_SLOT_HEX_WIDTH: usize = 64;

/// Unsigned 256-bit numeric parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(U256);

impl Quantity {
    pub const ZERO: Self = Self(U256::ZERO);

    pub fn new(value: U256) -> Self {
        Self(value)
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// Minimal `0x` hex, `0x0` for zero.
    pub fn to_hex(&self) -> String {
        let bytes = self.0.to_be_bytes::<32>();
        let digits = hex::encode(bytes);
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }

    /// Hex left-padded to a full storage slot.
    pub fn to_padded_hex(&self) -> String {
        pad_left(&self.to_hex(), STORAGE_SLOT_HEX_WIDTH)
    }
}

/// Left-pad the digits of a `0x` hex string with zeros to `width` characters.
/// Inputs already at least `width` digits long come back unchanged.
pub fn pad_left(hex: &str, width: usize) -> String {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    format!("0x{:0>width$}", digits, width = width)
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Quantity {
                fn from(v: $t) -> Self {
                    Self(U256::from(v))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<U256> for Quantity {
    fn from(v: U256) -> Self {
        Self(v)
    }
}

impl FromStr for Quantity {
    type Err = HardhatError;

    /// Accepts decimal (`"1000"`) or `0x`-prefixed hex (`"0x3e8"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex_digits) => (hex_digits, 16),
            None => (s, 10),
        };
        if digits.is_empty() {
            return Err(HardhatError::InvalidQuantity(format!("empty quantity {:?}", s)));
        }
        U256::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|e| HardhatError::InvalidQuantity(format!("{:?}: {}", s, e)))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

/// Block selector for state queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockNumberOrTag {
    Number(u64),
    #[default]
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
}

impl From<u64> for BlockNumberOrTag {
    fn from(n: u64) -> Self {
        BlockNumberOrTag::Number(n)
    }
}

impl FromStr for BlockNumberOrTag {
    type Err = HardhatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "latest" => Ok(BlockNumberOrTag::Latest),
            "earliest" => Ok(BlockNumberOrTag::Earliest),
            "pending" => Ok(BlockNumberOrTag::Pending),
            "safe" => Ok(BlockNumberOrTag::Safe),
            "finalized" => Ok(BlockNumberOrTag::Finalized),
            other => {
                let q: Quantity = other.parse()?;
                u64::try_from(q.as_u256())
                    .map(BlockNumberOrTag::Number)
                    .map_err(|_| HardhatError::InvalidQuantity(format!("block number {:?} exceeds u64", other)))
            }
        }
    }
}

impl fmt::Display for BlockNumberOrTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockNumberOrTag::Number(n) => write!(f, "{}", Quantity::from(*n)),
            BlockNumberOrTag::Latest => f.write_str("latest"),
            BlockNumberOrTag::Earliest => f.write_str("earliest"),
            BlockNumberOrTag::Pending => f.write_str("pending"),
            BlockNumberOrTag::Safe => f.write_str("safe"),
            BlockNumberOrTag::Finalized => f.write_str("finalized"),
        }
    }
}

impl Serialize for BlockNumberOrTag {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

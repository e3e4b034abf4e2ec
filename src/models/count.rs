//! Exact power-of-two counts up to `2^128`.

use crate::error::CalcError;
use serde::{Serialize, Serializer};
use std::fmt;

/// `2^128`, one past `u128::MAX`.
const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// Number of addresses or subnets, always a power of two.
///
/// Stored as the exponent so that `2^128` (all of IPv6) stays exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressCount {
    exponent: u8,
}

impl AddressCount {
    pub const MAX_EXPONENT: u8 = 128;

    pub fn power_of_two(exponent: u8) -> Result<Self, CalcError> {
        if exponent > Self::MAX_EXPONENT {
            return Err(CalcError::invalid_range(format!(
                "2^{exponent} exceeds the IPv6 address space"
            )));
        }
        Ok(AddressCount { exponent })
    }

    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    pub fn to_u128(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.exponent))
    }

    pub fn to_u64(&self) -> Option<u64> {
        1u64.checked_shl(u32::from(self.exponent))
    }

    /// The count, capped at `cap`.
    pub fn min_usize(&self, cap: usize) -> usize {
        match self.to_u128() {
            Some(n) if n < cap as u128 => n as usize,
            _ => cap,
        }
    }

    /// `2^N` notation.
    pub fn power_notation(&self) -> String {
        format!("2^{}", self.exponent)
    }
}

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_u128() {
            Some(n) => write!(f, "{n}"),
            None => f.write_str(TWO_POW_128),
        }
    }
}

/// Numbers when they fit in 64 bits, exact decimal strings otherwise.
impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.to_string()),
        }
    }
}

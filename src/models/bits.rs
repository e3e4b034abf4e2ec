//! Bit arithmetic over fixed width address integers.
//!
//! IPv4 addresses are handled as `u32`, IPv6 addresses as `u128`. Every
//! operation is exact for all prefix lengths from 0 through the width.

use crate::error::CalcError;
use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Not};

/// Fixed width unsigned integer holding an address.
pub trait AddressBits:
    Copy
    + Debug
    + Eq
    + Ord
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + TryFrom<usize>
{
    /// Address width in bits (32 or 128).
    const WIDTH: u8;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Shift left, `None` when `shift >= WIDTH`.
    fn shl_checked(self, shift: u32) -> Option<Self>;
    fn add_checked(self, rhs: Self) -> Option<Self>;
    fn sub_checked(self, rhs: Self) -> Option<Self>;
    fn mul_checked(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_address_bits {
    ($ty:ty, $width:expr) => {
        impl AddressBits for $ty {
            const WIDTH: u8 = $width;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;

            fn shl_checked(self, shift: u32) -> Option<Self> {
                self.checked_shl(shift)
            }
            fn add_checked(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
            fn sub_checked(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }
        }
    };
}

impl_address_bits!(u32, 32);
impl_address_bits!(u128, 128);

fn check_prefix<T: AddressBits>(prefix: u8) -> Result<(), CalcError> {
    if prefix > T::WIDTH {
        Err(CalcError::invalid_range(format!(
            "prefix /{prefix} exceeds the {}-bit address width",
            T::WIDTH
        )))
    } else {
        Ok(())
    }
}

/// `prefix` leading one bits followed by zero bits.
///
/// # Examples
/// ```
/// use subnet_calculator::models::network_mask;
/// assert_eq!(network_mask::<u32>(24).unwrap(), 0xFFFF_FF00);
/// assert_eq!(network_mask::<u128>(0).unwrap(), 0);
/// ```
pub fn network_mask<T: AddressBits>(prefix: u8) -> Result<T, CalcError> {
    check_prefix::<T>(prefix)?;
    // A shift by the full width is not representable, a /0 mask is all zeros.
    Ok(T::MAX
        .shl_checked(u32::from(T::WIDTH - prefix))
        .unwrap_or(T::ZERO))
}

/// Network address: `addr & mask`.
pub fn network<T: AddressBits>(addr: T, mask: T) -> T {
    addr & mask
}

/// Last address of the block: `network | !mask`.
///
/// For IPv4 this is the broadcast address.
pub fn broadcast<T: AddressBits>(network: T, mask: T) -> T {
    network | !mask
}

/// Number of addresses covered by a block of the given prefix.
///
/// `None` when the size is `2^WIDTH` and does not fit in `T` (prefix 0).
pub fn block_size<T: AddressBits>(prefix: u8) -> Result<Option<T>, CalcError> {
    check_prefix::<T>(prefix)?;
    Ok(T::ONE.shl_checked(u32::from(T::WIDTH - prefix)))
}

/// Usable host range `(network + 1, broadcast - 1)`.
///
/// `None` for the last two prefixes (/31 and /32 for IPv4) where the
/// conventional host range is degenerate.
pub fn host_range<T: AddressBits>(network: T, broadcast: T, prefix: u8) -> Option<(T, T)> {
    if prefix >= T::WIDTH.saturating_sub(1) {
        return None;
    }
    let host_min = network.add_checked(T::ONE)?;
    let host_max = broadcast.sub_checked(T::ONE)?;
    Some((host_min, host_max))
}

/// Network address of child `index` when splitting `base` into blocks of `prefix`.
pub fn nth_block<T: AddressBits>(base: T, index: usize, prefix: u8) -> Result<T, CalcError> {
    let overflow = || CalcError::invalid_range("subnet calculation overflowed");
    let index = T::try_from(index).map_err(|_| overflow())?;
    if index == T::ZERO {
        return Ok(base);
    }
    let size = block_size::<T>(prefix)?.ok_or_else(overflow)?;
    let offset = index.mul_checked(size).ok_or_else(overflow)?;
    base.add_checked(offset).ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_mask_ipv4() {
        assert_eq!(network_mask::<u32>(0).unwrap(), 0x0000_0000);
        assert_eq!(network_mask::<u32>(8).unwrap(), 0xFF00_0000);
        assert_eq!(network_mask::<u32>(16).unwrap(), 0xFFFF_0000);
        assert_eq!(network_mask::<u32>(24).unwrap(), 0xFFFF_FF00);
        assert_eq!(network_mask::<u32>(31).unwrap(), 0xFFFF_FFFE);
        assert_eq!(network_mask::<u32>(32).unwrap(), 0xFFFF_FFFF);
        assert!(network_mask::<u32>(33).is_err());
    }

    #[test]
    fn test_network_mask_ipv6() {
        assert_eq!(network_mask::<u128>(0).unwrap(), 0);
        assert_eq!(network_mask::<u128>(1).unwrap(), 1u128 << 127);
        assert_eq!(network_mask::<u128>(64).unwrap(), 0xFFFF_FFFF_FFFF_FFFFu128 << 64);
        assert_eq!(network_mask::<u128>(127).unwrap(), u128::MAX - 1);
        assert_eq!(network_mask::<u128>(128).unwrap(), u128::MAX);
        assert!(network_mask::<u128>(129).is_err());
    }

    #[test]
    fn test_network_and_broadcast() {
        let addr: u32 = 0xC0A8_012A; // 192.168.1.42
        let mask = network_mask::<u32>(24).unwrap();
        let net = network(addr, mask);
        assert_eq!(net, 0xC0A8_0100);
        assert_eq!(broadcast(net, mask), 0xC0A8_01FF);

        let mask = network_mask::<u32>(0).unwrap();
        assert_eq!(network(addr, mask), 0);
        assert_eq!(broadcast(0, mask), u32::MAX);

        let mask = network_mask::<u32>(32).unwrap();
        assert_eq!(broadcast(network(addr, mask), mask), addr);
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size::<u32>(0).unwrap(), None);
        assert_eq!(block_size::<u32>(1).unwrap(), Some(1 << 31));
        assert_eq!(block_size::<u32>(26).unwrap(), Some(64));
        assert_eq!(block_size::<u32>(32).unwrap(), Some(1));
        assert_eq!(block_size::<u128>(0).unwrap(), None);
        assert_eq!(block_size::<u128>(1).unwrap(), Some(1u128 << 127));
        assert_eq!(block_size::<u128>(128).unwrap(), Some(1));
    }

    #[test]
    fn test_host_range() {
        let mask = network_mask::<u32>(30).unwrap();
        let net = 0x0A00_0000;
        assert_eq!(
            host_range(net, broadcast(net, mask), 30),
            Some((0x0A00_0001, 0x0A00_0002))
        );
        let mask = network_mask::<u32>(0).unwrap();
        assert_eq!(host_range(0, broadcast(0, mask), 0), Some((1, u32::MAX - 1)));
        assert_eq!(host_range::<u32>(net, net + 1, 31), None);
        assert_eq!(host_range::<u32>(net, net, 32), None);
    }

    #[test]
    fn test_nth_block() {
        let base: u32 = 0x0A00_0000;
        assert_eq!(nth_block(base, 0, 26).unwrap(), base);
        assert_eq!(nth_block(base, 3, 26).unwrap(), 0x0A00_00C0);
        assert_eq!(nth_block(0u32, 99, 32).unwrap(), 99);
        assert_eq!(nth_block(0u128, 1, 1).unwrap(), 1u128 << 127);
        assert!(nth_block(u32::MAX, 1, 32).is_err());
    }
}

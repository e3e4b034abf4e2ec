//! Domain models for the address calculator.
//!
//! This module contains the core data structures and the bit arithmetic:
//! - [`Address`] - IPv4 or IPv6 address, with its parser
//! - [`Cidr`] - address with prefix length
//! - [`AddressCount`] - exact power-of-two counts
//! - [`bits`] - mask, network, broadcast and block arithmetic over `u32` / `u128`

mod address;
pub mod bits;
mod cidr;
mod count;

// Re-export public types
pub use address::{
    expand_ipv6, ipv4_binary, ipv6_binary, Address, AddressInput, Family,
};
pub(crate) use address::prefix_regex;
pub use bits::{block_size, broadcast, host_range, network, network_mask, nth_block, AddressBits};
pub use cidr::Cidr;
pub use count::AddressCount;

/// Prefix used for a bare IPv4 address in the calculator.
pub const DEFAULT_IPV4_PREFIX: u8 = 24;
/// Prefix used for a bare IPv6 address.
pub const DEFAULT_IPV6_PREFIX: u8 = 64;

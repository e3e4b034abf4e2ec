//! IPv4 / IPv6 address calculator.
//!
//! Parses `address[/prefix]` text, computes network, broadcast (last address),
//! host range and classification, and splits networks into sub-prefixes.
//! Everything here is a pure function of its inputs: no I/O, no shared state.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, ErrorKind};
pub use models::{Address, AddressCount, AddressInput, Cidr, Family};
pub use processing::{
    Ipv4Class, Ipv4Descriptor, Ipv4Subnet, Ipv6Descriptor, Locality, NetworkDescriptor, Subnet,
    SubnetSet, DEFAULT_SAMPLE_LIMIT, MAX_DISPLAYED_SUBNETS,
};

use models::DEFAULT_IPV6_PREFIX;

/// Describe an address and its network.
///
/// `netmask_text` may be a dotted decimal mask or a prefix number; a prefix
/// in `address_text` takes precedence. Without either, IPv4 uses /24 and
/// IPv6 /64.
///
/// # Examples
/// ```
/// use subnet_calculator::{describe, NetworkDescriptor};
/// let NetworkDescriptor::Ipv4(d) = describe("192.168.1.10/24", None).unwrap() else {
///     panic!("expected IPv4");
/// };
/// assert_eq!(d.broadcast.to_string(), "192.168.1.255");
/// ```
pub fn describe(
    address_text: &str,
    netmask_text: Option<&str>,
) -> Result<NetworkDescriptor, CalcError> {
    log::info!("#Start describe({address_text:?}, {netmask_text:?})");
    let input = AddressInput::parse(address_text)?;
    let prefix = processing::effective_prefix(&input, netmask_text)?;
    let descriptor = processing::build_descriptor(&input, prefix)?;
    log::debug!(
        "{} is in {} ({})",
        input.address,
        descriptor.network_cidr(),
        descriptor.locality()
    );
    Ok(descriptor)
}

/// Split the network in `address_text` into children of `target_prefix`.
///
/// IPv4 input must carry a prefix; bare IPv6 input is taken as a /64.
pub fn split(address_text: &str, target_prefix: u8) -> Result<SubnetSet, CalcError> {
    log::info!("#Start split({address_text:?}, /{target_prefix})");
    let input = AddressInput::parse(address_text)?;
    let prefix = match (input.prefix, input.family()) {
        (Some(prefix), _) => prefix,
        (None, Family::Ipv6) => DEFAULT_IPV6_PREFIX,
        (None, Family::Ipv4) => {
            return Err(CalcError::invalid_address(
                address_text.trim(),
                "IPv4 address must include CIDR notation (e.g. 192.168.0.0/24)",
            ))
        }
    };
    processing::split_network(Cidr::from_parts(input.address, prefix)?, target_prefix)
}

/// The first `limit` addresses of the block in `cidr_text`.
pub fn sample_addresses(cidr_text: &str, limit: usize) -> Result<Vec<Address>, CalcError> {
    log::info!("#Start sample_addresses({cidr_text:?}, {limit})");
    processing::sample_block(Cidr::new(cidr_text)?, limit)
}

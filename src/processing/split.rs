//! Subnet splitting.
//!
//! Divides a network into equal sized child networks of a longer prefix.
//! The number of enumerated children is capped, the true total is always
//! reported exactly.

use super::descriptor::hosts_per_net;
use crate::error::CalcError;
use crate::models::{
    broadcast, host_range, network, network_mask, nth_block, Address, AddressCount, Cidr,
};
use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Maximum number of child networks enumerated by [`split_network`].
pub const MAX_DISPLAYED_SUBNETS: usize = 100;

/// IPv4 child network with its broadcast and host range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4Subnet {
    pub network: Cidr,
    pub broadcast: Ipv4Addr,
    pub host_min: Option<Ipv4Addr>,
    pub host_max: Option<Ipv4Addr>,
    pub hosts_per_net: u64,
}

/// One child of a split. IPv6 children only carry the network/prefix pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Subnet {
    Ipv4(Ipv4Subnet),
    Ipv6(Cidr),
}

impl Subnet {
    pub fn network(&self) -> Cidr {
        match self {
            Subnet::Ipv4(s) => s.network,
            Subnet::Ipv6(cidr) => *cidr,
        }
    }
}

/// Result of splitting a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetSet {
    /// Base network with host bits cleared.
    pub original_network: Cidr,
    pub target_prefix: u8,
    /// Exact number of children, possibly far more than are listed.
    pub total_subnets: AddressCount,
    /// Number of children in `subnets`, at most [`MAX_DISPLAYED_SUBNETS`].
    pub displayed_subnets: usize,
    /// IPv4 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts_per_subnet: Option<u64>,
    /// Ordered by increasing network address.
    pub subnets: Vec<Subnet>,
}

/// Split `base` into child networks of `target_prefix`.
///
/// Fails with `InvalidRange` unless `base.prefix < target_prefix <= width`.
pub fn split_network(base: Cidr, target_prefix: u8) -> Result<SubnetSet, CalcError> {
    let width = base.address.family().width();
    if target_prefix <= base.prefix {
        return Err(CalcError::invalid_range(format!(
            "target prefix /{target_prefix} must be larger than current prefix /{}",
            base.prefix
        )));
    }
    if target_prefix > width {
        return Err(CalcError::invalid_range(format!(
            "{} prefix cannot exceed {width}",
            base.address.family()
        )));
    }

    let total_subnets = AddressCount::power_of_two(target_prefix - base.prefix)?;
    let displayed = total_subnets.min_usize(MAX_DISPLAYED_SUBNETS);
    log::info!(
        "#Start split_network() {base} ({} - {}) into /{target_prefix}: {total_subnets} subnets",
        base.lo()?,
        base.hi()?
    );
    if total_subnets.to_u128().map_or(true, |n| n > displayed as u128) {
        log::warn!(
            "Only listing {displayed} of {total_subnets} subnets of {base} /{target_prefix}"
        );
    }

    let (original_network, subnets, hosts_per_subnet) = match base.address {
        Address::V4(addr) => {
            let mask = network_mask::<u32>(base.prefix)?;
            let base_bits = network(u32::from(addr), mask);
            let subnets = (0..displayed)
                .map(|index| ipv4_child(base_bits, index, target_prefix).map(Subnet::Ipv4))
                .collect::<Result<Vec<_>, _>>()?;
            let original = Cidr {
                address: Address::V4(Ipv4Addr::from(base_bits)),
                prefix: base.prefix,
            };
            (original, subnets, Some(hosts_per_net(target_prefix)?))
        }
        Address::V6(addr) => {
            let mask = network_mask::<u128>(base.prefix)?;
            let base_bits = network(u128::from(addr), mask);
            let subnets = (0..displayed)
                .map(|index| {
                    nth_block(base_bits, index, target_prefix).map(|bits| {
                        Subnet::Ipv6(Cidr {
                            address: Address::V6(Ipv6Addr::from(bits)),
                            prefix: target_prefix,
                        })
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let original = Cidr {
                address: Address::V6(Ipv6Addr::from(base_bits)),
                prefix: base.prefix,
            };
            (original, subnets, None)
        }
    };

    Ok(SubnetSet {
        original_network,
        target_prefix,
        total_subnets,
        displayed_subnets: subnets.len(),
        hosts_per_subnet,
        subnets,
    })
}

fn ipv4_child(base: u32, index: usize, prefix: u8) -> Result<Ipv4Subnet, CalcError> {
    let net = nth_block(base, index, prefix)?;
    let mask = network_mask::<u32>(prefix)?;
    let last = broadcast(net, mask);
    let (host_min, host_max) = match host_range(net, last, prefix) {
        Some((lo, hi)) => (Some(Ipv4Addr::from(lo)), Some(Ipv4Addr::from(hi))),
        None => (None, None),
    };
    Ok(Ipv4Subnet {
        network: Cidr {
            address: Address::V4(Ipv4Addr::from(net)),
            prefix,
        },
        broadcast: Ipv4Addr::from(last),
        host_min,
        host_max,
        hosts_per_net: hosts_per_net(prefix)?,
    })
}

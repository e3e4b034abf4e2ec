//! Network descriptor builder.
//!
//! Assembles a [`NetworkDescriptor`] from a parsed address, its effective
//! prefix and the bit arithmetic in [`crate::models::bits`].

use super::classify::{Ipv4Class, Locality};
use crate::error::CalcError;
use crate::models::{
    block_size, broadcast, expand_ipv6, host_range, ipv4_binary, ipv6_binary, network,
    network_mask, Address, AddressCount, AddressInput, Cidr,
};
use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

/// IPv6 counts are printed exactly from this prefix on (at most 2^20 addresses).
pub const IPV6_EXACT_COUNT_MIN_PREFIX: u8 = 108;

/// Everything derived from one address and prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NetworkDescriptor {
    Ipv4(Ipv4Descriptor),
    Ipv6(Ipv6Descriptor),
}

impl NetworkDescriptor {
    /// Network address with prefix.
    pub fn network_cidr(&self) -> Cidr {
        match self {
            NetworkDescriptor::Ipv4(d) => d.network_cidr(),
            NetworkDescriptor::Ipv6(d) => d.network_cidr(),
        }
    }

    pub fn locality(&self) -> Locality {
        match self {
            NetworkDescriptor::Ipv4(d) => d.ip_type,
            NetworkDescriptor::Ipv6(d) => d.ip_type,
        }
    }
}

/// IPv4 network descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4Descriptor {
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// Unset for /31 and /32.
    pub host_min: Option<Ipv4Addr>,
    pub host_max: Option<Ipv4Addr>,
    pub total_addresses: AddressCount,
    /// Usable hosts: total - 2, 0 for /31 and /32.
    pub hosts_per_net: u64,
    pub class: Ipv4Class,
    pub ip_type: Locality,
}

impl Ipv4Descriptor {
    pub fn network_cidr(&self) -> Cidr {
        Cidr {
            address: Address::V4(self.network),
            prefix: self.prefix,
        }
    }

    pub fn address_binary(&self) -> String {
        ipv4_binary(self.address)
    }

    pub fn netmask_binary(&self) -> String {
        ipv4_binary(self.netmask)
    }

    pub fn wildcard_binary(&self) -> String {
        ipv4_binary(self.wildcard)
    }

    pub fn network_binary(&self) -> String {
        ipv4_binary(self.network)
    }

    pub fn broadcast_binary(&self) -> String {
        ipv4_binary(self.broadcast)
    }
}

/// IPv6 network descriptor.
///
/// `last` is the final address of the block; IPv6 has no broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Descriptor {
    /// Address text as given by the caller.
    pub input: String,
    pub address: Ipv6Addr,
    pub prefix: u8,
    pub network: Ipv6Addr,
    pub last: Ipv6Addr,
    pub address_count: AddressCount,
    /// Exact decimal for small blocks, `2^N` otherwise.
    pub total_addresses: String,
    pub ip_type: Locality,
}

impl Ipv6Descriptor {
    pub fn network_cidr(&self) -> Cidr {
        Cidr {
            address: Address::V6(self.network),
            prefix: self.prefix,
        }
    }

    pub fn expanded(&self) -> String {
        expand_ipv6(self.address)
    }

    pub fn network_expanded(&self) -> String {
        expand_ipv6(self.network)
    }

    pub fn last_expanded(&self) -> String {
        expand_ipv6(self.last)
    }

    pub fn address_binary(&self) -> String {
        ipv6_binary(self.address)
    }

    pub fn network_binary(&self) -> String {
        ipv6_binary(self.network)
    }
}

/// Number of usable IPv4 hosts in a block of the given prefix.
///
/// `2^(32 - prefix) - 2`, floored at 0 for /31 and /32.
pub fn hosts_per_net(prefix: u8) -> Result<u64, CalcError> {
    let total = block_size::<u32>(prefix)?.map_or(1u64 << 32, u64::from);
    Ok(if prefix >= 31 { 0 } else { total - 2 })
}

/// Build the descriptor for a parsed input and its effective prefix.
pub fn build(input: &AddressInput, prefix: u8) -> Result<NetworkDescriptor, CalcError> {
    match input.address {
        Address::V4(addr) => build_ipv4(addr, prefix).map(NetworkDescriptor::Ipv4),
        Address::V6(addr) => build_ipv6(&input.literal, addr, prefix).map(NetworkDescriptor::Ipv6),
    }
}

fn build_ipv4(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Descriptor, CalcError> {
    let mask = network_mask::<u32>(prefix)?;
    let net = network(u32::from(addr), mask);
    let last = broadcast(net, mask);
    let (host_min, host_max) = match host_range(net, last, prefix) {
        Some((lo, hi)) => (Some(Ipv4Addr::from(lo)), Some(Ipv4Addr::from(hi))),
        None => (None, None),
    };

    Ok(Ipv4Descriptor {
        address: addr,
        prefix,
        netmask: Ipv4Addr::from(mask),
        wildcard: Ipv4Addr::from(!mask),
        network: Ipv4Addr::from(net),
        broadcast: Ipv4Addr::from(last),
        host_min,
        host_max,
        total_addresses: AddressCount::power_of_two(32 - prefix)?,
        hosts_per_net: hosts_per_net(prefix)?,
        class: Ipv4Class::of(addr),
        ip_type: Locality::of_ipv4(addr),
    })
}

fn build_ipv6(literal: &str, addr: Ipv6Addr, prefix: u8) -> Result<Ipv6Descriptor, CalcError> {
    let mask = network_mask::<u128>(prefix)?;
    let net = network(u128::from(addr), mask);
    let last = broadcast(net, mask);
    let address_count = AddressCount::power_of_two(128 - prefix)?;

    let total_addresses = if prefix >= IPV6_EXACT_COUNT_MIN_PREFIX {
        address_count.to_string()
    } else {
        address_count.power_notation()
    };

    Ok(Ipv6Descriptor {
        input: literal.to_string(),
        address: addr,
        prefix,
        network: Ipv6Addr::from(net),
        last: Ipv6Addr::from(last),
        address_count,
        total_addresses,
        ip_type: Locality::of_ipv6(addr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_v4(text: &str) -> Ipv4Descriptor {
        let input = AddressInput::parse(text).unwrap();
        match build(&input, input.prefix.unwrap()).unwrap() {
            NetworkDescriptor::Ipv4(d) => d,
            other => panic!("expected IPv4, got {other:?}"),
        }
    }

    fn describe_v6(text: &str) -> Ipv6Descriptor {
        let input = AddressInput::parse(text).unwrap();
        match build(&input, input.prefix.unwrap()).unwrap() {
            NetworkDescriptor::Ipv6(d) => d,
            other => panic!("expected IPv6, got {other:?}"),
        }
    }

    #[test]
    fn test_hosts_per_net() {
        assert_eq!(hosts_per_net(0).unwrap(), 4294967294);
        assert_eq!(hosts_per_net(8).unwrap(), 16777214);
        assert_eq!(hosts_per_net(24).unwrap(), 254);
        assert_eq!(hosts_per_net(26).unwrap(), 62);
        assert_eq!(hosts_per_net(30).unwrap(), 2);
        assert_eq!(hosts_per_net(31).unwrap(), 0);
        assert_eq!(hosts_per_net(32).unwrap(), 0);
        assert!(hosts_per_net(33).is_err());
    }

    #[test]
    fn test_ipv4_private_class_c() {
        let d = describe_v4("192.168.1.10/24");
        assert_eq!(d.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(d.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(d.host_min, Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(d.host_max, Some(Ipv4Addr::new(192, 168, 1, 254)));
        assert_eq!(d.netmask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(d.wildcard, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(d.hosts_per_net, 254);
        assert_eq!(d.total_addresses.to_u64(), Some(256));
        assert_eq!(d.ip_type.to_string(), "Private Internet");
        assert_eq!(d.class.to_string(), "Class C");
        assert_eq!(d.netmask_binary(), "11111111.11111111.11111111.00000000");
        assert_eq!(d.network_cidr().to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_ipv4_boundary_prefixes() {
        let d = describe_v4("10.1.2.3/0");
        assert_eq!(d.network, Ipv4Addr::UNSPECIFIED);
        assert_eq!(d.broadcast, Ipv4Addr::BROADCAST);
        assert_eq!(d.host_min, Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(d.host_max, Some(Ipv4Addr::new(255, 255, 255, 254)));
        assert_eq!(d.total_addresses.to_string(), "4294967296");

        let d = describe_v4("10.1.2.3/31");
        assert_eq!(d.network, Ipv4Addr::new(10, 1, 2, 2));
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(d.host_min, None);
        assert_eq!(d.host_max, None);
        assert_eq!(d.hosts_per_net, 0);

        let d = describe_v4("10.1.2.3/32");
        assert_eq!(d.network, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(d.host_min, None);
        assert_eq!(d.wildcard, Ipv4Addr::UNSPECIFIED);
        assert_eq!(d.total_addresses.to_u64(), Some(1));
    }

    #[test]
    fn test_ipv6_descriptor() {
        let d = describe_v6("2001:db8::1/64");
        assert_eq!(d.input, "2001:db8::1");
        assert_eq!(d.expanded(), "2001:0db8:0000:0000:0000:0000:0000:0001");
        assert_eq!(
            d.network_expanded(),
            "2001:0db8:0000:0000:0000:0000:0000:0000"
        );
        assert_eq!(d.network_cidr().to_string(), "2001:db8::/64");
        assert_eq!(d.last.to_string(), "2001:db8::ffff:ffff:ffff:ffff");
        assert_eq!(d.total_addresses, "2^64");
        assert_eq!(d.ip_type, Locality::Public);
    }

    #[test]
    fn test_ipv6_total_addresses() {
        assert_eq!(describe_v6("::/0").total_addresses, "2^128");
        assert_eq!(describe_v6("::/0").address_count.to_string().len(), 39);
        assert_eq!(describe_v6("fd00::/107").total_addresses, "2^21");
        assert_eq!(describe_v6("fd00::/108").total_addresses, "1048576");
        assert_eq!(describe_v6("fd00::/127").total_addresses, "2");
        assert_eq!(describe_v6("fd00::/128").total_addresses, "1");
    }

    #[test]
    fn test_ipv6_boundary_prefixes() {
        let d = describe_v6("2001:db8::7/127");
        assert_eq!(d.network.to_string(), "2001:db8::6");
        assert_eq!(d.last.to_string(), "2001:db8::7");

        let d = describe_v6("2001:db8::7/128");
        assert_eq!(d.network, d.address);
        assert_eq!(d.last, d.address);

        let d = describe_v6("2001:db8::7/0");
        assert_eq!(d.network, Ipv6Addr::UNSPECIFIED);
        assert_eq!(d.last, Ipv6Addr::from(u128::MAX));
    }

    #[test]
    fn test_descriptor_network_and_locality() {
        let d = build(&AddressInput::parse("fe80::1").unwrap(), 10).unwrap();
        assert_eq!(d.network_cidr().to_string(), "fe80::/10");
        assert_eq!(d.locality(), Locality::LinkLocal);

        let d = build(&AddressInput::parse("127.0.0.1").unwrap(), 8).unwrap();
        assert_eq!(d.network_cidr().to_string(), "127.0.0.0/8");
        assert_eq!(d.locality(), Locality::Loopback);
    }

    #[test]
    fn test_serialize_shape() {
        let d = build(&AddressInput::parse("10.0.0.1/30").unwrap(), 30).unwrap();
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["type"], "ipv4");
        assert_eq!(json["hostMin"], "10.0.0.1");
        assert_eq!(json["hostsPerNet"], 2);
        assert_eq!(json["ipType"], "Private Internet");
        assert_eq!(json["class"], "Class A");
    }
}

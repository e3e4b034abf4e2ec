//! Address with CIDR prefix length.

use super::address::{Address, AddressInput};
use super::bits::{broadcast, network, network_mask};
use crate::error::CalcError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Address plus prefix length (0-32 for IPv4, 0-128 for IPv6).
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    pub address: Address,
    pub prefix: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}

impl Cidr {
    /// Create a new [`Cidr`] from text such as "10.0.0.0/24" or "2001:db8::/32".
    ///
    /// The prefix is required.
    pub fn new(addr_cidr: &str) -> Result<Cidr, CalcError> {
        let input = AddressInput::parse(addr_cidr)?;
        match input.prefix {
            Some(prefix) => Ok(Cidr {
                address: input.address,
                prefix,
            }),
            None => Err(CalcError::invalid_address(
                addr_cidr.trim(),
                "missing /prefix",
            )),
        }
    }

    /// Build from parts, checking the prefix against the family width.
    pub fn from_parts(address: Address, prefix: u8) -> Result<Cidr, CalcError> {
        let width = address.family().width();
        if prefix > width {
            return Err(CalcError::invalid_range(format!(
                "prefix /{prefix} exceeds {width} bits"
            )));
        }
        Ok(Cidr { address, prefix })
    }

    /// Lowest (network) address of the block.
    pub fn lo(&self) -> Result<Address, CalcError> {
        Ok(match self.address {
            Address::V4(addr) => {
                let mask = network_mask::<u32>(self.prefix)?;
                Address::V4(Ipv4Addr::from(network(u32::from(addr), mask)))
            }
            Address::V6(addr) => {
                let mask = network_mask::<u128>(self.prefix)?;
                Address::V6(Ipv6Addr::from(network(u128::from(addr), mask)))
            }
        })
    }

    /// Highest (broadcast / last) address of the block.
    pub fn hi(&self) -> Result<Address, CalcError> {
        Ok(match self.address {
            Address::V4(addr) => {
                let mask = network_mask::<u32>(self.prefix)?;
                let net = network(u32::from(addr), mask);
                Address::V4(Ipv4Addr::from(broadcast(net, mask)))
            }
            Address::V6(addr) => {
                let mask = network_mask::<u128>(self.prefix)?;
                let net = network(u128::from(addr), mask);
                Address::V6(Ipv6Addr::from(broadcast(net, mask)))
            }
        })
    }

    /// The same block with host bits cleared.
    pub fn network(&self) -> Result<Cidr, CalcError> {
        Ok(Cidr {
            address: self.lo()?,
            prefix: self.prefix,
        })
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl PartialEq for Cidr {
    fn eq(&self, other: &Cidr) -> bool {
        self.address == other.address && self.prefix == other.prefix
    }
}

impl PartialOrd for Cidr {
    fn partial_cmp(&self, other: &Cidr) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

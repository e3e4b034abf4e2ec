//! Sample addresses from the start of a CIDR block.

use crate::error::CalcError;
use crate::models::{nth_block, Address, AddressCount, Cidr};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Number of addresses sampled when the caller does not ask for a count.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// The first `min(limit, block size)` addresses of `cidr`, counted from its
/// network address.
pub fn sample_block(cidr: Cidr, limit: usize) -> Result<Vec<Address>, CalcError> {
    let network = cidr.network()?;
    let width = cidr.address.family().width();
    let count = AddressCount::power_of_two(width - cidr.prefix)?.min_usize(limit);
    log::debug!("Sampling {count} addresses from {network}");

    (0..count)
        .map(|index| match network.address {
            Address::V4(addr) => nth_block(u32::from(addr), index, 32)
                .map(|bits| Address::V4(Ipv4Addr::from(bits))),
            Address::V6(addr) => nth_block(u128::from(addr), index, 128)
                .map(|bits| Address::V6(Ipv6Addr::from(bits))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str, limit: usize) -> Vec<String> {
        sample_block(Cidr::new(text).unwrap(), limit)
            .unwrap()
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_sample_ipv4() {
        assert_eq!(
            sample("192.0.2.77/24", DEFAULT_SAMPLE_LIMIT),
            vec!["192.0.2.0", "192.0.2.1", "192.0.2.2", "192.0.2.3", "192.0.2.4"]
        );
        assert_eq!(sample("192.0.2.77/31", 5), vec!["192.0.2.76", "192.0.2.77"]);
        assert_eq!(sample("192.0.2.77/32", 5), vec!["192.0.2.77"]);
        assert!(sample("192.0.2.0/24", 0).is_empty());
    }

    #[test]
    fn test_sample_ipv6() {
        assert_eq!(
            sample("2001:db8::/126", 10),
            vec!["2001:db8::", "2001:db8::1", "2001:db8::2", "2001:db8::3"]
        );
        assert_eq!(sample("::/0", 2), vec!["::", "::1"]);
    }
}

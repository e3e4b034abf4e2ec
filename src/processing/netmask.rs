//! Netmask / CIDR normalization.
//!
//! Converts dotted decimal netmasks to prefix lengths and back, and decides
//! the effective prefix when the caller left it out.

use crate::error::CalcError;
use crate::models::{
    network_mask, prefix_regex, Address, AddressInput, Family, DEFAULT_IPV4_PREFIX,
    DEFAULT_IPV6_PREFIX,
};
use std::net::Ipv4Addr;

/// Convert a dotted decimal netmask to a prefix length.
///
/// Only contiguous masks are accepted: `255.0.255.0` is rejected rather
/// than counted as 16 one-bits.
pub fn netmask_to_prefix(mask_text: &str) -> Result<u8, CalcError> {
    let mask = match Address::parse(mask_text) {
        Ok(Address::V4(mask)) => u32::from(mask),
        _ => {
            return Err(CalcError::invalid_netmask(
                mask_text,
                "not a dotted decimal IPv4 netmask",
            ))
        }
    };
    let prefix = mask.leading_ones() as u8;
    if network_mask::<u32>(prefix)? != mask {
        return Err(CalcError::invalid_netmask(
            mask_text,
            "one-bits are not contiguous",
        ));
    }
    Ok(prefix)
}

/// Dotted decimal netmask for an IPv4 prefix length.
pub fn prefix_to_netmask(prefix: u8) -> Result<Ipv4Addr, CalcError> {
    Ok(Ipv4Addr::from(network_mask::<u32>(prefix)?))
}

/// Interpret a netmask argument for the given family.
///
/// IPv4 accepts a dotted decimal mask or a bare prefix number, IPv6 only a
/// bare prefix number.
pub fn parse_netmask(mask_text: &str, family: Family) -> Result<u8, CalcError> {
    let mask_text = mask_text.trim();
    if family == Family::Ipv4 && mask_text.contains('.') {
        return netmask_to_prefix(mask_text);
    }
    let prefix = mask_text.strip_prefix('/').unwrap_or(mask_text);
    if !prefix_regex().is_match(prefix) {
        return Err(CalcError::invalid_netmask(
            mask_text,
            "expected a netmask or prefix length",
        ));
    }
    match prefix.parse::<u8>() {
        Ok(len) if len <= family.width() => Ok(len),
        Ok(_) => Err(CalcError::invalid_netmask(
            mask_text,
            format!("prefix exceeds {} bits", family.width()),
        )),
        Err(_) => Err(CalcError::invalid_netmask(
            mask_text,
            "expected a netmask or prefix length",
        )),
    }
}

/// Effective prefix for a calculator request.
///
/// A prefix in the address text wins over the netmask argument; with
/// neither, bare IPv4 defaults to /24 and bare IPv6 to /64.
pub fn effective_prefix(input: &AddressInput, mask_text: Option<&str>) -> Result<u8, CalcError> {
    let mask_text = mask_text.map(str::trim).filter(|m| !m.is_empty());
    match (input.prefix, mask_text) {
        (Some(prefix), Some(mask)) => {
            log::warn!("Ignoring netmask {mask} for {}/{prefix}", input.literal);
            Ok(prefix)
        }
        (Some(prefix), None) => Ok(prefix),
        (None, Some(mask)) => parse_netmask(mask, input.family()),
        (None, None) => {
            let prefix = match input.family() {
                Family::Ipv4 => DEFAULT_IPV4_PREFIX,
                Family::Ipv6 => DEFAULT_IPV6_PREFIX,
            };
            log::debug!("No prefix for {}, using /{prefix}", input.literal);
            Ok(prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_netmask_to_prefix() {
        assert_eq!(netmask_to_prefix("0.0.0.0").unwrap(), 0);
        assert_eq!(netmask_to_prefix("255.0.0.0").unwrap(), 8);
        assert_eq!(netmask_to_prefix("255.255.255.0").unwrap(), 24);
        assert_eq!(netmask_to_prefix("255.255.255.192").unwrap(), 26);
        assert_eq!(netmask_to_prefix("255.255.255.254").unwrap(), 31);
        assert_eq!(netmask_to_prefix("255.255.255.255").unwrap(), 32);
    }

    #[test]
    fn test_netmask_non_contiguous() {
        for mask in ["255.0.255.0", "0.255.255.255", "255.255.255.1", "128.0.0.1"] {
            assert_eq!(
                netmask_to_prefix(mask).unwrap_err().kind(),
                ErrorKind::InvalidNetmask,
                "{mask} should be rejected"
            );
        }
        assert_eq!(
            netmask_to_prefix("255.255.256.0").unwrap_err().kind(),
            ErrorKind::InvalidNetmask
        );
        assert_eq!(
            netmask_to_prefix("255.255.0").unwrap_err().kind(),
            ErrorKind::InvalidNetmask
        );
    }

    #[test]
    fn test_prefix_round_trip() {
        for prefix in 0..=32 {
            let mask = prefix_to_netmask(prefix).unwrap();
            assert_eq!(netmask_to_prefix(&mask.to_string()).unwrap(), prefix);
        }
        assert!(prefix_to_netmask(33).is_err());
    }

    #[test]
    fn test_parse_netmask() {
        assert_eq!(parse_netmask("24", Family::Ipv4).unwrap(), 24);
        assert_eq!(parse_netmask("/26", Family::Ipv4).unwrap(), 26);
        assert_eq!(parse_netmask("96", Family::Ipv6).unwrap(), 96);
        assert_eq!(
            parse_netmask("33", Family::Ipv4).unwrap_err().kind(),
            ErrorKind::InvalidNetmask
        );
        assert_eq!(
            parse_netmask("255.255.0.0", Family::Ipv6).unwrap_err().kind(),
            ErrorKind::InvalidNetmask
        );
        assert_eq!(
            parse_netmask("abc", Family::Ipv4).unwrap_err().kind(),
            ErrorKind::InvalidNetmask
        );
    }

    #[test]
    fn test_parse_netmask_digits_only() {
        for mask in ["+24", "/+24", "-0", "2 4", "0x18", "0024"] {
            assert_eq!(
                parse_netmask(mask, Family::Ipv4).unwrap_err().kind(),
                ErrorKind::InvalidNetmask,
                "{mask} should be rejected"
            );
        }
        assert_eq!(
            parse_netmask("+64", Family::Ipv6).unwrap_err().kind(),
            ErrorKind::InvalidNetmask
        );
        assert_eq!(parse_netmask(" 024 ", Family::Ipv4).unwrap(), 24);
    }

    #[test]
    fn test_effective_prefix() {
        let bare = AddressInput::parse("192.168.1.10").unwrap();
        assert_eq!(effective_prefix(&bare, None).unwrap(), 24);
        assert_eq!(effective_prefix(&bare, Some("")).unwrap(), 24);
        assert_eq!(effective_prefix(&bare, Some("255.255.0.0")).unwrap(), 16);

        let with_prefix = AddressInput::parse("192.168.1.10/30").unwrap();
        assert_eq!(
            effective_prefix(&with_prefix, Some("255.255.0.0")).unwrap(),
            30
        );

        let v6 = AddressInput::parse("2001:db8::1").unwrap();
        assert_eq!(effective_prefix(&v6, None).unwrap(), 64);
        assert_eq!(effective_prefix(&v6, Some("48")).unwrap(), 48);
    }
}

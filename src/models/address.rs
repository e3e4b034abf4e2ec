//! Address parsing and textual renderings.
//!
//! Provides [`Address`], a tagged union over IPv4 and IPv6, and
//! [`AddressInput`] for `address[/prefix]` text as typed by a user.

use crate::error::CalcError;
use itertools::Itertools;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

/// Number of 16-bit groups in an IPv6 address.
const IPV6_GROUPS: usize = 8;

static OCTET_REGEX: OnceLock<Regex> = OnceLock::new();
static HEXTET_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn octet_regex() -> &'static Regex {
    OCTET_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

fn hextet_regex() -> &'static Regex {
    HEXTET_REGEX.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{1,4}$").expect("Invalid Regex"))
}

/// Decimal prefix length: digits only, no sign.
pub(crate) fn prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

/// Address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    /// Width of the address in bits.
    pub fn width(&self) -> u8 {
        match self {
            Family::Ipv4 => 32,
            Family::Ipv6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Ipv4 => f.write_str("ipv4"),
            Family::Ipv6 => f.write_str("ipv6"),
        }
    }
}

/// An IPv4 or IPv6 address. The family never changes after construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Address {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl Address {
    /// Parse an address literal without prefix.
    ///
    /// Text containing `:` is parsed as IPv6, anything else as IPv4.
    pub fn parse(text: &str) -> Result<Address, CalcError> {
        let text = text.trim();
        if text.contains(':') {
            parse_ipv6(text).map(Address::V6)
        } else {
            parse_ipv4(text).map(Address::V4)
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::Ipv4,
            Address::V6(_) => Family::Ipv6,
        }
    }

    /// Dotted decimal for IPv4, eight 4-digit groups for IPv6.
    pub fn expanded(&self) -> String {
        match self {
            Address::V4(addr) => addr.to_string(),
            Address::V6(addr) => expand_ipv6(*addr),
        }
    }

    /// One bit-group per octet (`.`-joined) or hextet (`:`-joined).
    pub fn binary(&self) -> String {
        match self {
            Address::V4(addr) => ipv4_binary(*addr),
            Address::V6(addr) => ipv6_binary(*addr),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(addr) => write!(f, "{addr}"),
            Address::V6(addr) => write!(f, "{addr}"),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::V4(addr)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address::V6(addr)
    }
}

/// `address[/prefix]` as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInput {
    /// The address literal exactly as given, without the prefix.
    pub literal: String,
    pub address: Address,
    /// Unset when the text had no `/`.
    pub prefix: Option<u8>,
}

impl AddressInput {
    pub fn parse(text: &str) -> Result<AddressInput, CalcError> {
        let text = text.trim();
        let (literal, prefix_text) = match text.split_once('/') {
            Some((literal, prefix)) => (literal, Some(prefix)),
            None => (text, None),
        };
        let address = Address::parse(literal)?;
        let prefix = prefix_text
            .map(|p| parse_prefix(text, p, address.family()))
            .transpose()?;
        log::trace!("parsed {text:?} as {address} prefix={prefix:?}");
        Ok(AddressInput {
            literal: literal.to_string(),
            address,
            prefix,
        })
    }

    pub fn family(&self) -> Family {
        self.address.family()
    }
}

fn parse_prefix(input: &str, prefix: &str, family: Family) -> Result<u8, CalcError> {
    if !prefix_regex().is_match(prefix) {
        return Err(CalcError::invalid_address(
            input,
            format!("prefix '{prefix}' is not a number"),
        ));
    }
    match prefix.parse::<u8>() {
        Ok(len) if len <= family.width() => Ok(len),
        _ => Err(CalcError::invalid_address(
            input,
            format!("prefix /{prefix} exceeds {} bits", family.width()),
        )),
    }
}

fn parse_ipv4(text: &str) -> Result<Ipv4Addr, CalcError> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != 4 {
        return Err(CalcError::invalid_address(
            text,
            format!("expected 4 octets, found {}", segments.len()),
        ));
    }
    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        if !octet_regex().is_match(segment) {
            return Err(CalcError::invalid_address(
                text,
                format!("octet '{segment}' is not a number"),
            ));
        }
        *octet = segment.parse().map_err(|_| {
            CalcError::invalid_address(text, format!("octet '{segment}' is out of range"))
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn split_groups(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split(':').collect()
    }
}

fn parse_ipv6(text: &str) -> Result<Ipv6Addr, CalcError> {
    let groups: Vec<&str> = match text.split_once("::") {
        None => {
            let groups = split_groups(text);
            if groups.len() != IPV6_GROUPS {
                return Err(CalcError::invalid_address(
                    text,
                    format!("expected {IPV6_GROUPS} groups, found {}", groups.len()),
                ));
            }
            groups
        }
        Some((left, right)) => {
            if right.contains("::") {
                return Err(CalcError::invalid_address(text, "'::' may only occur once"));
            }
            let left = split_groups(left);
            let right = split_groups(right);
            let given = left.len() + right.len();
            if given >= IPV6_GROUPS {
                return Err(CalcError::invalid_address(
                    text,
                    format!("'::' with {given} groups leaves nothing to compress"),
                ));
            }
            let missing = IPV6_GROUPS - given;
            left.into_iter()
                .chain(std::iter::repeat("0").take(missing))
                .chain(right)
                .collect()
        }
    };

    let mut segments = [0u16; IPV6_GROUPS];
    for (segment, group) in segments.iter_mut().zip(&groups) {
        if !hextet_regex().is_match(group) {
            return Err(CalcError::invalid_address(
                text,
                format!("group '{group}' is not 1-4 hex digits"),
            ));
        }
        *segment = u16::from_str_radix(group, 16).map_err(|_| {
            CalcError::invalid_address(text, format!("group '{group}' is out of range"))
        })?;
    }
    Ok(Ipv6Addr::from(segments))
}

/// `.`-joined 8-bit groups.
pub fn ipv4_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// `:`-joined 16-bit groups.
pub fn ipv6_binary(addr: Ipv6Addr) -> String {
    addr.segments().iter().map(|s| format!("{s:016b}")).join(":")
}

/// Eight zero-padded 4-digit groups.
pub fn expand_ipv6(addr: Ipv6Addr) -> String {
    addr.segments().iter().map(|s| format!("{s:04x}")).join(":")
}

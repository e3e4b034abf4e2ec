//! Address class and locality classification.

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Classful IPv4 designation by first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Ipv4Class {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
    /// 0.x.x.x and 127.x.x.x
    Unknown,
}

impl Ipv4Class {
    pub fn of(addr: Ipv4Addr) -> Ipv4Class {
        match addr.octets()[0] {
            1..=126 => Ipv4Class::A,
            128..=191 => Ipv4Class::B,
            192..=223 => Ipv4Class::C,
            224..=239 => Ipv4Class::D,
            240..=255 => Ipv4Class::E,
            _ => Ipv4Class::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ipv4Class::A => "Class A",
            Ipv4Class::B => "Class B",
            Ipv4Class::C => "Class C",
            Ipv4Class::D => "Class D (Multicast)",
            Ipv4Class::E => "Class E (Reserved)",
            Ipv4Class::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Ipv4Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Ipv4Class {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Private / loopback / link-local / public designation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Locality {
    Private,
    Loopback,
    LinkLocal,
    Public,
}

impl Locality {
    /// 10/8, 172.16/12 and 192.168/16 are private, 127/8 loopback,
    /// 169.254/16 link local.
    pub fn of_ipv4(addr: Ipv4Addr) -> Locality {
        let [first, second, ..] = addr.octets();
        match (first, second) {
            (10, _) | (172, 16..=31) | (192, 168) => Locality::Private,
            (127, _) => Locality::Loopback,
            (169, 254) => Locality::LinkLocal,
            _ => Locality::Public,
        }
    }

    /// `::1` is loopback, fe80::/10 link local, fc00::/7 (unique local) private.
    pub fn of_ipv6(addr: Ipv6Addr) -> Locality {
        let first = addr.segments()[0];
        if addr == Ipv6Addr::LOCALHOST {
            Locality::Loopback
        } else if first & 0xffc0 == 0xfe80 {
            Locality::LinkLocal
        } else if first & 0xfe00 == 0xfc00 {
            Locality::Private
        } else {
            Locality::Public
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locality::Private => "Private Internet",
            Locality::Loopback => "Loopback",
            Locality::LinkLocal => "Link Local",
            Locality::Public => "Public Internet",
        }
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Locality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

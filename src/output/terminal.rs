//! Terminal output.
//!
//! Aligned text in the style of classic `ipcalc` output. Colors come from
//! `colored` and are switched off globally when disabled in the config.

use crate::models::Address;
use crate::processing::{NetworkDescriptor, Subnet, SubnetSet};
use colored::Colorize;

const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 22;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One `Label: value  detail` line.
fn line(out: &mut String, label: &str, value: &str, detail: &str) {
    let label = format!("{:<LABEL_WIDTH$}", format!("{label}:"));
    if detail.is_empty() {
        out.push_str(&format!("{} {}\n", label.bold(), value.blue()));
    } else {
        let value = format!("{value:<VALUE_WIDTH$}");
        out.push_str(&format!(
            "{} {} {}\n",
            label.bold(),
            value.blue(),
            detail.yellow()
        ));
    }
}

fn optional(addr: Option<impl ToString>) -> String {
    addr.map(|a| a.to_string()).unwrap_or_else(|| "n/a".to_string())
}

/// Render a [`NetworkDescriptor`] as aligned text.
pub fn descriptor_text(descriptor: &NetworkDescriptor) -> String {
    let mut out = String::new();
    match descriptor {
        NetworkDescriptor::Ipv4(d) => {
            line(&mut out, "Address", &d.address.to_string(), &d.address_binary());
            line(
                &mut out,
                "Netmask",
                &format!("{} = {}", d.netmask, d.prefix),
                &d.netmask_binary(),
            );
            line(&mut out, "Wildcard", &d.wildcard.to_string(), &d.wildcard_binary());
            out.push_str("=>\n");
            line(
                &mut out,
                "Network",
                &d.network_cidr().to_string(),
                &d.network_binary(),
            );
            line(
                &mut out,
                "Broadcast",
                &d.broadcast.to_string(),
                &d.broadcast_binary(),
            );
            line(&mut out, "HostMin", &optional(d.host_min), "");
            line(&mut out, "HostMax", &optional(d.host_max), "");
            line(
                &mut out,
                "Hosts/Net",
                &d.hosts_per_net.to_string(),
                &format!("{}, {}", d.class, d.ip_type),
            );
        }
        NetworkDescriptor::Ipv6(d) => {
            line(&mut out, "Address", &d.input, "");
            line(&mut out, "Expanded", &d.expanded(), "");
            line(&mut out, "Prefix", &d.prefix.to_string(), "");
            out.push_str("=>\n");
            line(&mut out, "Network", &d.network_cidr().to_string(), "");
            line(&mut out, "Expanded", &d.network_expanded(), "");
            line(&mut out, "First", &d.network.to_string(), "");
            line(&mut out, "Last", &d.last.to_string(), "");
            line(&mut out, "Addresses", &d.total_addresses, &d.ip_type.to_string());
        }
    }
    out
}

/// Render a [`SubnetSet`] as a header plus one line per child.
pub fn subnet_set_text(set: &SubnetSet) -> String {
    let mut out = format!(
        "{} {} into /{}: {} subnets, showing {}\n",
        "Split".bold(),
        set.original_network.to_string().blue(),
        set.target_prefix,
        set.total_subnets,
        set.displayed_subnets
    );
    if let Some(hosts) = set.hosts_per_subnet {
        out.push_str(&format!("{} {hosts}\n", "Hosts/Net:".bold()));
    }
    for (i, subnet) in set.subnets.iter().enumerate() {
        let row = match subnet {
            Subnet::Ipv4(s) => format!(
                "{:>4}  {} {:<16} {} - {}\n",
                i + 1,
                format!("{:<20}", s.network.to_string()).blue(),
                s.broadcast.to_string(),
                optional(s.host_min),
                optional(s.host_max)
            ),
            Subnet::Ipv6(cidr) => format!("{:>4}  {}\n", i + 1, cidr.to_string().blue()),
        };
        out.push_str(&row);
    }
    out
}

/// One address per line.
pub fn sample_text(addresses: &[Address]) -> String {
    addresses.iter().map(|a| format!("{a}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{describe, split};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_descriptor_text_ipv4() {
        colored::control::set_override(false);
        let text = descriptor_text(&describe("192.168.1.10/24", None).unwrap());
        assert!(text.contains("Network:    192.168.1.0/24"), "{text}");
        assert!(text.contains("HostMax:    192.168.1.254\n"), "{text}");
        assert!(text.contains("Class C, Private Internet"), "{text}");
        assert!(text.contains("11000000.10101000.00000001.00000000"), "{text}");
    }

    #[test]
    fn test_descriptor_text_host_route() {
        colored::control::set_override(false);
        let text = descriptor_text(&describe("10.0.0.1/32", None).unwrap());
        assert!(text.contains("HostMin:    n/a\n"), "{text}");
    }

    #[test]
    fn test_descriptor_text_ipv6() {
        colored::control::set_override(false);
        let text = descriptor_text(&describe("2001:db8::1/64", None).unwrap());
        assert!(text.contains("2001:0db8:0000:0000:0000:0000:0000:0001"), "{text}");
        assert!(text.contains("Network:    2001:db8::/64\n"), "{text}");
        assert!(text.contains("2^64"), "{text}");
    }

    #[test]
    fn test_subnet_set_text() {
        colored::control::set_override(false);
        let text = subnet_set_text(&split("10.0.0.0/24", 26).unwrap());
        assert!(text.starts_with("Split 10.0.0.0/24 into /26: 4 subnets, showing 4\n"));
        assert!(text.contains("10.0.0.192/26"));
        assert!(text.contains("10.0.0.193 - 10.0.0.254"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_sample_text() {
        let addrs = crate::sample_addresses("10.0.0.0/30", 2).unwrap();
        assert_eq!(sample_text(&addrs), "10.0.0.0\n10.0.0.1\n");
    }
}

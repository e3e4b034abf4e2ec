//! CSV output for descriptors and subnet sets.

use super::terminal::format_field;
use crate::processing::{NetworkDescriptor, Subnet, SubnetSet};

fn optional(addr: Option<impl ToString>) -> String {
    addr.map(|a| a.to_string()).unwrap_or_else(|| "None".to_string())
}

/// `"field","value"` rows for a descriptor.
pub fn descriptor_csv(descriptor: &NetworkDescriptor) -> String {
    let rows: Vec<(&str, String)> = match descriptor {
        NetworkDescriptor::Ipv4(d) => vec![
            ("address", d.address.to_string()),
            ("netmask", d.netmask.to_string()),
            ("cidr", d.prefix.to_string()),
            ("wildcard", d.wildcard.to_string()),
            ("network", d.network_cidr().to_string()),
            ("broadcast", d.broadcast.to_string()),
            ("host_min", optional(d.host_min)),
            ("host_max", optional(d.host_max)),
            ("hosts_per_net", d.hosts_per_net.to_string()),
            ("class", d.class.to_string()),
            ("ip_type", d.ip_type.to_string()),
        ],
        NetworkDescriptor::Ipv6(d) => vec![
            ("address", d.input.clone()),
            ("expanded", d.expanded()),
            ("prefix", d.prefix.to_string()),
            ("network", d.network_cidr().to_string()),
            ("network_expanded", d.network_expanded()),
            ("first", d.network.to_string()),
            ("last", d.last.to_string()),
            ("total_addresses", d.total_addresses.clone()),
            ("ip_type", d.ip_type.to_string()),
        ],
    };

    let mut out = String::from(r#""field","value""#);
    out.push('\n');
    for (field, value) in rows {
        out.push_str(&format!(
            "{},{}\n",
            format_field(field, 18),
            format_field(value, 42)
        ));
    }
    out
}

/// One CSV row per enumerated child network.
pub fn subnet_set_csv(set: &SubnetSet) -> String {
    log::debug!(
        "subnet_set_csv() {} children of {}",
        set.displayed_subnets,
        set.original_network
    );
    let mut out =
        String::from(r#""cnt","network","broadcast","host_min","host_max","hosts_per_net""#);
    out.push('\n');
    for (i, subnet) in set.subnets.iter().enumerate() {
        let row = match subnet {
            Subnet::Ipv4(s) => format!(
                "{cnt},{network},{broadcast},{host_min},{host_max},{hosts}\n",
                cnt = format_field(i + 1, 6),
                network = format_field(s.network, 20),
                broadcast = format_field(s.broadcast, 17),
                host_min = format_field(optional(s.host_min), 17),
                host_max = format_field(optional(s.host_max), 17),
                hosts = format_field(s.hosts_per_net, 12),
            ),
            Subnet::Ipv6(cidr) => format!(
                "{cnt},{network},\"None\",\"None\",\"None\",\"None\"\n",
                cnt = format_field(i + 1, 6),
                network = format_field(cidr, 44),
            ),
        };
        out.push_str(&row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{describe, split};

    #[test]
    fn test_subnet_set_csv() {
        let csv = subnet_set_csv(&split("10.0.0.0/24", 26).unwrap());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            r#""cnt","network","broadcast","host_min","host_max","hosts_per_net""#
        );
        assert_eq!(
            lines[1],
            r#"   "1",       "10.0.0.0/26",      "10.0.0.63",       "10.0.0.1",      "10.0.0.62",        "62""#
        );
        assert!(lines[4].contains(r#""10.0.0.192/26""#));
    }

    #[test]
    fn test_subnet_set_csv_ipv6() {
        let csv = subnet_set_csv(&split("2001:db8::/64", 65).unwrap());
        assert!(csv.contains(r#""2001:db8:0:0:8000::/65","None""#));
    }

    #[test]
    fn test_descriptor_csv() {
        let csv = descriptor_csv(&describe("172.16.5.4", Some("255.255.240.0")).unwrap());
        assert!(csv.starts_with("\"field\",\"value\"\n"));
        assert!(csv.contains(r#""network","#));
        assert!(csv.contains(r#""172.16.0.0/20""#));
        assert!(csv.contains(r#""Private Internet""#));
    }
}

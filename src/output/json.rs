//! JSON documents for calculator results.
//!
//! Shaped like the calculator HTTP responses callers already consume:
//! `success`, `type`, nested `{decimal, binary}` objects and a timestamp.

use crate::error::CalcError;
use crate::models::Address;
use crate::processing::{NetworkDescriptor, SubnetSet};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use std::net::Ipv4Addr;

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn rendered(addr: Ipv4Addr) -> Value {
    json!({
        "decimal": addr.to_string(),
        "binary": crate::models::ipv4_binary(addr),
    })
}

fn rendered_opt(addr: Option<Ipv4Addr>) -> Value {
    addr.map(rendered).unwrap_or(Value::Null)
}

pub fn descriptor_json(descriptor: &NetworkDescriptor) -> Value {
    match descriptor {
        NetworkDescriptor::Ipv4(d) => json!({
            "success": true,
            "type": "ipv4",
            "address": rendered(d.address),
            "netmask": {
                "decimal": d.netmask.to_string(),
                "cidr": d.prefix,
                "binary": d.netmask_binary(),
            },
            "wildcard": rendered(d.wildcard),
            "network": {
                "decimal": d.network_cidr().to_string(),
                "binary": d.network_binary(),
                "class": d.class,
            },
            "broadcast": rendered(d.broadcast),
            "hostMin": rendered_opt(d.host_min),
            "hostMax": rendered_opt(d.host_max),
            "totalAddresses": d.total_addresses,
            "hostsPerNet": d.hosts_per_net,
            "ipType": d.ip_type,
            "timestamp": timestamp(),
        }),
        NetworkDescriptor::Ipv6(d) => json!({
            "success": true,
            "type": "ipv6",
            "address": {
                "compressed": d.input,
                "canonical": d.address.to_string(),
                "expanded": d.expanded(),
                "binary": d.address_binary(),
            },
            "prefix": d.prefix,
            "network": {
                "compressed": d.network.to_string(),
                "expanded": d.network_expanded(),
                "binary": d.network_binary(),
                "cidr": d.network_cidr().to_string(),
            },
            "range": {
                "first": d.network.to_string(),
                "last": d.last.to_string(),
                "firstExpanded": d.network_expanded(),
                "lastExpanded": d.last_expanded(),
            },
            "totalAddresses": d.total_addresses,
            "ipType": d.ip_type,
            "timestamp": timestamp(),
        }),
    }
}

pub fn subnet_set_json(set: &SubnetSet) -> Value {
    let family = set.original_network.address.family();
    let mut doc = json!({
        "success": true,
        "type": family,
        "originalNetwork": set.original_network,
        "targetPrefix": set.target_prefix,
        "totalSubnets": set.total_subnets,
        "displayedSubnets": set.displayed_subnets,
        "subnets": set.subnets,
        "timestamp": timestamp(),
    });
    if let (Some(hosts), Some(obj)) = (set.hosts_per_subnet, doc.as_object_mut()) {
        obj.insert("hostsPerSubnet".to_string(), json!(hosts));
    }
    doc
}

pub fn sample_json(cidr_text: &str, addresses: &[Address]) -> Value {
    json!({
        "success": true,
        "cidr": cidr_text,
        "addresses": addresses,
        "timestamp": timestamp(),
    })
}

pub fn error_json(error: &CalcError) -> Value {
    json!({
        "success": false,
        "kind": error.kind(),
        "error": error.to_string(),
        "timestamp": timestamp(),
    })
}

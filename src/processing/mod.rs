//! Address calculator logic.
//!
//! This module contains the calculations built on top of the models:
//! - [`netmask`] - netmask / prefix normalization
//! - [`classify`] - address class and locality
//! - [`descriptor`] - network descriptor builder
//! - [`split`] - subnet splitting
//! - [`sample`] - address sampling from a block

mod classify;
mod descriptor;
mod netmask;
mod sample;
mod split;

// Re-export public functions
pub use classify::{Ipv4Class, Locality};
pub use descriptor::{
    build as build_descriptor, hosts_per_net, Ipv4Descriptor, Ipv6Descriptor, NetworkDescriptor,
    IPV6_EXACT_COUNT_MIN_PREFIX,
};
pub use netmask::{effective_prefix, netmask_to_prefix, parse_netmask, prefix_to_netmask};
pub use sample::{sample_block, DEFAULT_SAMPLE_LIMIT};
pub use split::{split_network, Ipv4Subnet, Subnet, SubnetSet, MAX_DISPLAYED_SUBNETS};

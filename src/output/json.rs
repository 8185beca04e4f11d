//! JSON rendering for `--json`.

use crate::models::{AddressBlock, NetworkInfo};
use crate::processing::{capacity_for, describe, Subnets};
use serde::Serialize;
use std::net::Ipv4Addr;

use super::table::netmask_for;

/// A partition, with at most `shown` sub-blocks described.
#[derive(Serialize, Debug)]
pub struct SubnetReport {
    pub network: AddressBlock,
    pub new_prefix: u8,
    pub total: u64,
    pub shown: usize,
    pub subnets: Vec<NetworkInfo>,
}

impl SubnetReport {
    /// Describe up to `limit` sub-blocks (0 means all).
    pub fn new(network: AddressBlock, subnets: Subnets, limit: usize) -> SubnetReport {
        let limit = if limit == 0 { usize::MAX } else { limit };
        let new_prefix = subnets.prefix_len();
        let total = subnets.remaining();
        let subnets: Vec<NetworkInfo> = subnets.take(limit).map(describe).collect();
        SubnetReport {
            network,
            new_prefix,
            total,
            shown: subnets.len(),
            subnets,
        }
    }
}

/// Sizing answer, optionally applied to a base network.
#[derive(Serialize, Debug)]
pub struct HostsReport {
    pub hosts: i64,
    pub prefix_len: u8,
    pub netmask: Ipv4Addr,
    pub capacity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkInfo>,
}

impl HostsReport {
    pub fn new(hosts: i64, prefix_len: u8, network: Option<NetworkInfo>) -> HostsReport {
        HostsReport {
            hosts,
            prefix_len,
            netmask: netmask_for(prefix_len),
            capacity: capacity_for(prefix_len),
            network,
        }
    }
}

/// Collapsed networks; `supernet` is set when they form a single block.
#[derive(Serialize, Debug)]
pub struct SupernetReport {
    pub networks: Vec<AddressBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supernet: Option<NetworkInfo>,
}

impl SupernetReport {
    pub fn new(networks: Vec<AddressBlock>) -> SupernetReport {
        let supernet = match networks.as_slice() {
            [single] => Some(describe(*single)),
            _ => None,
        };
        SupernetReport { networks, supernet }
    }
}

/// Pretty-printed JSON of any report.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

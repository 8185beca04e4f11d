//! Plain-text tables for the command-line front end.
//!
//! Every number shown comes from the processing functions; nothing here does
//! address arithmetic of its own.

use super::terminal::{banner, format_field, rule};
use crate::config::{INFO_TABLE_PAD, SUBNET_TABLE_WIDTH};
use crate::models::{get_cidr_mask, AddressBlock, NetworkInfo};
use crate::processing::{capacity_for, describe, Subnets};
use std::fmt::Write;
use std::net::Ipv4Addr;

/// Labelled fields of a [`NetworkInfo`], in display order.
pub fn network_info_rows(info: &NetworkInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Network Address", info.network.to_string()),
        ("Broadcast Address", info.broadcast.to_string()),
        ("Subnet Mask", info.mask.to_string()),
        ("Wildcard Mask", info.wildcard.to_string()),
        ("Prefix Length", info.prefix_len.to_string()),
        ("Network Class", info.class.to_string()),
        ("Number of Hosts", info.usable_hosts.to_string()),
        ("IP Range", info.host_range()),
        ("CIDR Notation", info.block.to_string()),
    ]
}

/// Key/value table of every fact about one block.
pub fn network_info_table(info: &NetworkInfo) -> String {
    let rows = network_info_rows(info);
    let max_key_len = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let width = max_key_len + INFO_TABLE_PAD;

    let mut out = banner("Network Information", width);
    for (key, value) in rows {
        let _ = writeln!(out, "{key:max_key_len$} : {value}");
    }
    out.push_str(&rule('=', width));
    out.push('\n');
    out
}

/// One row per sub-block, at most `limit` rows (0 means no limit).
///
/// Only the rows shown are generated from `subnets`.
pub fn subnet_table(subnets: Subnets, limit: usize) -> String {
    let total = subnets.remaining();
    let limit = if limit == 0 { usize::MAX } else { limit };

    let mut out = banner("Subnet Information", SUBNET_TABLE_WIDTH);
    let _ = writeln!(
        out,
        "{} {} {} {} {} Hosts",
        format_field("Subnet", 20),
        format_field("Network Address", 15),
        format_field("Broadcast", 15),
        format_field("Mask", 15),
        format_field("Range", 30),
    );
    out.push_str(&rule('-', SUBNET_TABLE_WIDTH));
    out.push('\n');

    let mut shown: u64 = 0;
    for block in subnets.take(limit) {
        let info = describe(block);
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            format_field(info.block, 20),
            format_field(info.network, 15),
            format_field(info.broadcast, 15),
            format_field(info.mask, 15),
            format_field(info.host_range(), 30),
            info.usable_hosts,
        );
        shown += 1;
    }

    out.push_str(&rule('=', SUBNET_TABLE_WIDTH));
    out.push('\n');
    if shown < total {
        let _ = writeln!(
            out,
            "Showing {shown} of {total} subnets; use --limit 0 to list all."
        );
    }
    out
}

/// Netmask for a bare prefix length.
pub fn netmask_for(prefix_len: u8) -> Ipv4Addr {
    Ipv4Addr::from(get_cidr_mask(prefix_len))
}

/// Answer to "how big a subnet for this many hosts".
pub fn hosts_summary(hosts: i64, prefix_len: u8) -> String {
    format!(
        "For {hosts} hosts, you need a /{prefix_len} subnet (netmask: {mask})\n\
         This subnet can accommodate {capacity} hosts\n",
        mask = netmask_for(prefix_len),
        capacity = capacity_for(prefix_len),
    )
}

/// Result of collapsing a set of networks.
pub fn supernet_summary(blocks: &[AddressBlock]) -> String {
    match blocks {
        [single] => format!("Supernet that contains all provided networks: {single}\n"),
        _ => {
            let mut out = format!(
                "Networks are not contiguous, they collapse to {} blocks:\n",
                blocks.len()
            );
            for block in blocks {
                let _ = writeln!(out, "  {block}");
            }
            out
        }
    }
}

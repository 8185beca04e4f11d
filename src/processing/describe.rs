//! Static facts about a single block.

use crate::models::{AddressBlock, AddressClass, NetworkInfo};

/// Derive every display field of `block`.
pub fn describe(block: AddressBlock) -> NetworkInfo {
    NetworkInfo {
        block,
        network: block.network(),
        broadcast: block.broadcast(),
        mask: block.mask(),
        wildcard: block.wildcard(),
        prefix_len: block.prefix_len(),
        num_addresses: block.num_addresses(),
        usable_hosts: block.usable_hosts(),
        first_host: block.first_host(),
        last_host: block.last_host(),
        class: AddressClass::of(block.network()),
    }
}

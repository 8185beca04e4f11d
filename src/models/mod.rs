//! Domain models for the subnet calculator.
//!
//! - [`AddressBlock`] - canonical IPv4 network (base address + prefix length)
//! - [`NetworkInfo`] and [`AddressClass`] - derived, display-ready facts

mod ipv4;
mod network_info;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, lo_mask, AddressBlock, MAX_LENGTH,
};
pub use network_info::{AddressClass, NetworkInfo};

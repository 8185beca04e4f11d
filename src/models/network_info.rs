//! Derived facts about one address block.

use super::AddressBlock;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Legacy classful category of an address, from its first octet.
///
/// Display metadata only; no other computation looks at it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D (Multicast)")]
    D,
    #[serde(rename = "E (Reserved)")]
    E,
}

impl AddressClass {
    pub fn from_first_octet(octet: u8) -> AddressClass {
        match octet {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            _ => AddressClass::E,
        }
    }

    pub fn of(addr: Ipv4Addr) -> AddressClass {
        AddressClass::from_first_octet(addr.octets()[0])
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (Multicast)",
            AddressClass::E => "E (Reserved)",
        };
        f.write_str(label)
    }
}

/// Everything there is to say about a block, precomputed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    /// The block in CIDR notation.
    pub block: AddressBlock,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub prefix_len: u8,
    /// Total addresses, including network and broadcast.
    pub num_addresses: u64,
    /// Addresses assignable to hosts (all of them for /31 and /32).
    pub usable_hosts: u64,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub class: AddressClass,
}

impl NetworkInfo {
    /// Host range as `first - last`.
    pub fn host_range(&self) -> String {
        format!("{} - {}", self.first_host, self.last_host)
    }
}

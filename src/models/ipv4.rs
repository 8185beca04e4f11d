//! IPv4 address block in canonical CIDR form.
//!
//! Provides [`AddressBlock`], the only entity the calculator works on, along
//! with the bit helpers every operation is built from.

use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped to a full mask.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Clear the host bits of `bits` for a prefix of `len`.
pub fn cut_addr(bits: u32, len: u8) -> u32 {
    bits & get_cidr_mask(len)
}

/// Highest address of the block of length `len` containing `bits`.
pub fn broadcast_addr(bits: u32, len: u8) -> u32 {
    let mask = get_cidr_mask(len);
    (bits & mask) | !mask
}

/// Number of addresses in a block of length `len`.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Longest prefix `bits` can be the network address of, from its trailing zeros.
///
/// `0.0.0.0` is aligned to every prefix, so it returns 0.
pub fn lo_mask(bits: u32) -> u8 {
    MAX_LENGTH - bits.trailing_zeros() as u8
}

/// An IPv4 network: base address with host bits cleared, and a prefix length.
///
/// Values are always canonical; two blocks are equal iff base and prefix are.
/// Ordering is by base, then by prefix, so a supernet sorts before the first
/// of its subnets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressBlock {
    base: u32,
    prefix_len: u8,
}

impl AddressBlock {
    /// Build a block from any address inside it, clearing the host bits.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<AddressBlock, ParseError> {
        if prefix_len > MAX_LENGTH {
            return Err(ParseError::OutOfRange {
                field: "prefix length",
                value: prefix_len as u64,
            });
        }
        Ok(AddressBlock::from_bits(u32::from(addr), prefix_len))
    }

    /// Caller guarantees `prefix_len <= MAX_LENGTH`.
    pub(crate) fn from_bits(bits: u32, prefix_len: u8) -> AddressBlock {
        debug_assert!(prefix_len <= MAX_LENGTH, "prefix_len[{prefix_len}] > 32");
        AddressBlock {
            base: cut_addr(bits, prefix_len),
            prefix_len,
        }
    }

    /// Network address as an integer.
    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Network address (lowest address of the block).
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(get_cidr_mask(self.prefix_len))
    }

    /// Bitwise complement of the subnet mask.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!get_cidr_mask(self.prefix_len))
    }

    /// Broadcast address as an integer.
    pub fn last(&self) -> u32 {
        broadcast_addr(self.base, self.prefix_len)
    }

    /// Broadcast address (highest address of the block).
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.last())
    }

    pub fn num_addresses(&self) -> u64 {
        block_size(self.prefix_len)
    }

    /// Whether the first and last address are reserved for network and broadcast.
    ///
    /// /31 point-to-point links and /32 host routes reserve nothing.
    pub fn has_reserved_addresses(&self) -> bool {
        self.prefix_len < MAX_LENGTH - 1
    }

    /// Number of addresses that can be assigned to hosts.
    pub fn usable_hosts(&self) -> u64 {
        if self.has_reserved_addresses() {
            self.num_addresses() - 2
        } else {
            self.num_addresses()
        }
    }

    pub fn first_host(&self) -> Ipv4Addr {
        if self.has_reserved_addresses() {
            Ipv4Addr::from(self.base + 1)
        } else {
            self.network()
        }
    }

    pub fn last_host(&self) -> Ipv4Addr {
        if self.has_reserved_addresses() {
            Ipv4Addr::from(self.last() - 1)
        } else {
            self.broadcast()
        }
    }

    /// True if `other` lies entirely inside this block.
    pub fn contains(&self, other: &AddressBlock) -> bool {
        other.prefix_len >= self.prefix_len
            && other.base >= self.base
            && other.base <= self.last()
    }

    pub fn contains_addr(&self, addr: Ipv4Addr) -> bool {
        cut_addr(u32::from(addr), self.prefix_len) == self.base
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &AddressBlock) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len)
    }
}

impl FromStr for AddressBlock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<AddressBlock, ParseError> {
        crate::processing::parse(s)
    }
}

impl Serialize for AddressBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AddressBlock {
    fn deserialize<D>(deserializer: D) -> Result<AddressBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid CIDR '{s}': {e}")))
    }
}

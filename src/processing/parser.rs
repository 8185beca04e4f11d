//! Text to [`AddressBlock`] parsing.
//!
//! Accepts `A.B.C.D/N`, `A.B.C.D E.F.G.H` (address and dotted mask), and as a
//! fallback `A.B.C.D/E.F.G.H` (netmask or hostmask) or a bare `A.B.C.D` (a /32).

use crate::error::ParseError;
use crate::models::{AddressBlock, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)/([0-9]+)$").expect("Invalid Regex?");
    static ref ADDR_MASK_RE: Regex =
        Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)\s+([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)$")
            .expect("Invalid Regex?");
    static ref SLASH_MASK_RE: Regex =
        Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)/([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)$")
            .expect("Invalid Regex?");
    static ref BARE_ADDR_RE: Regex =
        Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)$").expect("Invalid Regex?");
}

/// A network as written by the user, before normalization.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetworkInput {
    /// `addr/prefix`, also `addr/netmask` and `addr/hostmask` once resolved
    Cidr { addr: Ipv4Addr, prefix: u8 },
    /// `addr mask`
    AddressMask { addr: Ipv4Addr, mask: Ipv4Addr },
}

impl NetworkInput {
    pub fn addr(&self) -> Ipv4Addr {
        match self {
            NetworkInput::Cidr { addr, .. } | NetworkInput::AddressMask { addr, .. } => *addr,
        }
    }

    /// Prefix length; for the mask form this is the number of set bits.
    pub fn prefix_len(&self) -> u8 {
        match self {
            NetworkInput::Cidr { prefix, .. } => *prefix,
            NetworkInput::AddressMask { mask, .. } => u32::from(*mask).count_ones() as u8,
        }
    }

    /// False for a mask like `255.0.255.0`, whose set bits are not one leading run.
    ///
    /// Such masks are still accepted; their prefix is the count of set bits.
    pub fn has_contiguous_mask(&self) -> bool {
        match self {
            NetworkInput::Cidr { .. } => true,
            NetworkInput::AddressMask { mask, .. } => {
                let bits = u32::from(*mask);
                bits.leading_ones() == bits.count_ones()
            }
        }
    }

    /// Normalize to a canonical block, clearing host bits.
    pub fn to_block(&self) -> Result<AddressBlock, ParseError> {
        AddressBlock::new(self.addr(), self.prefix_len())
    }
}

impl FromStr for NetworkInput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<NetworkInput, ParseError> {
        parse_input(s)
    }
}

/// Recognize which textual form `text` uses, validating every number.
pub fn parse_input(text: &str) -> Result<NetworkInput, ParseError> {
    let text = text.trim();

    if let Some(caps) = CIDR_RE.captures(text) {
        let addr = parse_addr(&caps[1], text)?;
        let prefix = parse_number(&caps[2], "prefix length", MAX_LENGTH as u64)?;
        return Ok(NetworkInput::Cidr {
            addr,
            prefix: prefix as u8,
        });
    }

    if let Some(caps) = ADDR_MASK_RE.captures(text) {
        let addr = parse_addr(&caps[1], text)?;
        let mask = parse_octets(&caps[2])?;
        return Ok(NetworkInput::AddressMask { addr, mask });
    }

    if let Some(caps) = SLASH_MASK_RE.captures(text) {
        let addr = parse_addr(&caps[1], text)?;
        let mask = parse_addr(&caps[2], text)?;
        let prefix = prefix_from_slash_mask(mask).ok_or_else(|| ParseError::Malformed {
            input: text.to_string(),
        })?;
        return Ok(NetworkInput::Cidr { addr, prefix });
    }

    if let Some(caps) = BARE_ADDR_RE.captures(text) {
        let addr = parse_addr(&caps[1], text)?;
        return Ok(NetworkInput::Cidr {
            addr,
            prefix: MAX_LENGTH,
        });
    }

    Err(ParseError::Malformed {
        input: text.to_string(),
    })
}

/// Parse a network in any accepted form into a canonical block.
///
/// The address does not have to be a network address:
/// `192.168.1.5/24` yields `192.168.1.0/24`.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::parse;
/// let block = parse("192.168.1.5 255.255.255.0").unwrap();
/// assert_eq!(block.to_string(), "192.168.1.0/24");
/// ```
pub fn parse(text: &str) -> Result<AddressBlock, ParseError> {
    parse_input(text)?.to_block()
}

/// Prefix of a mask written after a slash.
///
/// A netmask (`255.255.0.0`) or a hostmask (`0.0.255.255`); any other bit
/// pattern has no prefix. `0.0.0.0` and `255.255.255.255` read as netmasks.
fn prefix_from_slash_mask(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.count_ones();
    if bits.leading_ones() == ones {
        Some(ones as u8)
    } else if bits.trailing_ones() == ones {
        Some(MAX_LENGTH - ones as u8)
    } else {
        None
    }
}

/// Dotted address octets; a leading zero (`010`) makes the whole input malformed.
fn parse_addr(dotted: &str, input: &str) -> Result<Ipv4Addr, ParseError> {
    if dotted
        .split('.')
        .any(|part| part.len() > 1 && part.starts_with('0'))
    {
        return Err(ParseError::Malformed {
            input: input.to_string(),
        });
    }
    parse_octets(dotted)
}

fn parse_octets(dotted: &str) -> Result<Ipv4Addr, ParseError> {
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(dotted.split('.')) {
        *octet = parse_number(part, "octet", u8::MAX as u64)? as u8;
    }
    Ok(Ipv4Addr::from(octets))
}

/// `digits` is all ASCII digits (the regexes match `[0-9]` only).
fn parse_number(digits: &str, field: &'static str, max: u64) -> Result<u64, ParseError> {
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    if value > max {
        return Err(ParseError::OutOfRange { field, value });
    }
    Ok(value)
}

//! IPv4 CIDR calculator.
//!
//! Parses networks, describes them, splits them into equal subnets, sizes a
//! subnet for a host count and collapses sets of networks into supernets.
//! The [`processing`] functions are pure; [`cli`] and [`output`] are the
//! command-line front end built on top of them.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CollapseError, ParseError, PartitionError, SizerError};
pub use models::{AddressBlock, AddressClass, NetworkInfo};
pub use processing::{
    capacity_for, collapse, collapse_str, describe, minimal_prefix_for, parse, parse_input,
    partition, NetworkInput, PartitionBy, Subnets,
};

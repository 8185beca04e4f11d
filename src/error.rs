//! Error types for the address block operations.
//!
//! Every operation returns its own error enum so callers can match on the
//! exact failure kind. None of them are retried: all operations are
//! deterministic, a retry reproduces the same error.

use thiserror::Error;

/// Failure to turn text into an [`AddressBlock`](crate::models::AddressBlock).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid IP network format: '{input}'")]
    Malformed { input: String },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u64 },
}

/// Failure to split a block into equal sub-blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("number of subnets must be a power of 2, got {count}")]
    NotPowerOfTwo { count: u64 },

    #[error("new prefix length /{new} must be greater than the network's prefix length /{current}")]
    PrefixNotLarger { new: u8, current: u8 },

    #[error("prefix length cannot be greater than 32, got /{prefix}")]
    PrefixTooLong { prefix: u8 },

    #[error("cannot create {requested} subnets, maximum possible subnets: {max}")]
    ExceedsAddressSpace { requested: u64, max: u64 },
}

/// Failure to size a block for a host count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizerError {
    #[error("number of hosts must be positive, got {hosts}")]
    NonPositive { hosts: i64 },

    #[error("{hosts} hosts exceed IPv4 capacity")]
    ExceedsCapacity { hosts: i64 },
}

/// Failure to collapse a set of blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollapseError {
    #[error("at least one network must be provided")]
    EmptyInput,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

//! Address block operations.
//!
//! All of them are pure functions over immutable values:
//! - [`parser`] - text to canonical block
//! - [`describe`] - derived facts about one block
//! - [`partition`] - equal split by count or new prefix
//! - [`sizer`] - host count to prefix length
//! - [`collapse`] - merge blocks into covering supernets

mod collapse;
mod describe;
mod parser;
mod partition;
mod sizer;

// Re-export public functions
pub use collapse::{collapse, collapse_str};
pub use describe::describe;
pub use parser::{parse, parse_input, NetworkInput};
pub use partition::{partition, PartitionBy, Subnets};
pub use sizer::{capacity_for, minimal_prefix_for};

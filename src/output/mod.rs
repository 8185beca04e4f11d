//! Output formatting for calculator results.
//!
//! - [`table`] - plain-text tables
//! - [`json`] - JSON reports for `--json`
//! - [`terminal`] - padding and banner helpers

mod json;
mod table;
mod terminal;

pub use json::{to_json, HostsReport, SubnetReport, SupernetReport};
pub use table::{
    hosts_summary, netmask_for, network_info_rows, network_info_table, subnet_table,
    supernet_summary,
};
pub use terminal::{banner, format_field, rule};

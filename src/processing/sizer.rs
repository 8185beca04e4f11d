//! Choosing a prefix length for a host count.

use crate::error::SizerError;
use crate::models::{block_size, MAX_LENGTH};

/// Smallest block (longest prefix) holding `host_count` hosts plus network
/// and broadcast addresses.
///
/// The two reserved addresses are always counted, so one or two hosts get a
/// /30, never a /31. Point-to-point links need special casing by the caller.
pub fn minimal_prefix_for(host_count: i64) -> Result<u8, SizerError> {
    if host_count <= 0 {
        return Err(SizerError::NonPositive { hosts: host_count });
    }

    let total_ips_needed = host_count as u64 + 2;
    let host_bits = (0..=MAX_LENGTH as u32)
        .find(|bits| (1u64 << bits) >= total_ips_needed)
        .ok_or(SizerError::ExceedsCapacity { hosts: host_count })?;

    Ok(MAX_LENGTH - host_bits as u8)
}

/// Hosts a block of `prefix_len` holds under the same reservation rule,
/// saturating at 0 for /31 and /32.
///
/// Differs from [`AddressBlock::usable_hosts`](crate::models::AddressBlock::usable_hosts),
/// which counts every address of a /31 or /32 as usable.
pub fn capacity_for(prefix_len: u8) -> u64 {
    block_size(prefix_len).saturating_sub(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_prefix_for() {
        assert_eq!(minimal_prefix_for(100), Ok(25));
        assert_eq!(minimal_prefix_for(500), Ok(23));
        assert_eq!(minimal_prefix_for(254), Ok(24));
        assert_eq!(minimal_prefix_for(255), Ok(23));
        assert_eq!(minimal_prefix_for(126), Ok(25));
        assert_eq!(minimal_prefix_for(127), Ok(24));
    }

    #[test]
    fn test_small_counts_always_reserve_two() {
        assert_eq!(minimal_prefix_for(1), Ok(30));
        assert_eq!(minimal_prefix_for(2), Ok(30));
        assert_eq!(minimal_prefix_for(3), Ok(29));
    }

    #[test]
    fn test_non_positive() {
        assert_eq!(
            minimal_prefix_for(0),
            Err(SizerError::NonPositive { hosts: 0 })
        );
        assert_eq!(
            minimal_prefix_for(-5),
            Err(SizerError::NonPositive { hosts: -5 })
        );
    }

    #[test]
    fn test_capacity_limits() {
        let whole_space = (1i64 << 32) - 2;
        assert_eq!(minimal_prefix_for(whole_space), Ok(0));
        assert_eq!(
            minimal_prefix_for(whole_space + 1),
            Err(SizerError::ExceedsCapacity {
                hosts: whole_space + 1
            })
        );
        assert_eq!(
            minimal_prefix_for(i64::MAX),
            Err(SizerError::ExceedsCapacity { hosts: i64::MAX })
        );
    }

    #[test]
    fn test_monotonic() {
        let mut previous = minimal_prefix_for(1).unwrap();
        for hosts in 2..5000 {
            let prefix = minimal_prefix_for(hosts).unwrap();
            assert!(prefix <= previous, "{hosts} hosts -> /{prefix} > /{previous}");
            assert!(capacity_for(prefix) >= hosts as u64);
            previous = prefix;
        }
    }

    #[test]
    fn test_capacity_for() {
        assert_eq!(capacity_for(24), 254);
        assert_eq!(capacity_for(25), 126);
        assert_eq!(capacity_for(30), 2);
        assert_eq!(capacity_for(31), 0);
        assert_eq!(capacity_for(32), 0);
        assert_eq!(capacity_for(0), (1 << 32) - 2);
    }
}

//! Merging blocks into the fewest covering supernets.
//!
//! Blocks become `[base, broadcast]` intervals, contiguous or overlapping
//! intervals are merged, and each merged interval is cut back into aligned
//! CIDR blocks. Gaps between inputs are never bridged.

use crate::error::CollapseError;
use crate::models::{block_size, lo_mask, AddressBlock, MAX_LENGTH};
use crate::processing::parse;
use itertools::Itertools;

/// Collapse `blocks` into the minimal ordered set of blocks covering exactly
/// the same addresses.
///
/// Output is ascending by base with no overlaps. Duplicate and nested inputs
/// are absorbed.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::{collapse, parse};
/// let blocks = [parse("10.0.0.0/25").unwrap(), parse("10.0.0.128/25").unwrap()];
/// assert_eq!(collapse(&blocks).unwrap(), vec![parse("10.0.0.0/24").unwrap()]);
/// ```
pub fn collapse(blocks: &[AddressBlock]) -> Result<Vec<AddressBlock>, CollapseError> {
    if blocks.is_empty() {
        return Err(CollapseError::EmptyInput);
    }

    // u64 so `end + 1` cannot overflow at 255.255.255.255
    let collapsed = blocks
        .iter()
        .map(|b| (b.base() as u64, b.last() as u64))
        .sorted()
        .coalesce(|current, next| {
            if next.0 <= current.1 + 1 {
                Ok((current.0, current.1.max(next.1)))
            } else {
                Err((current, next))
            }
        })
        .flat_map(|(start, end)| cover_range(start, end))
        .collect();

    Ok(collapsed)
}

/// Parse every network string, then [`collapse`] them.
pub fn collapse_str<I, S>(networks: I) -> Result<Vec<AddressBlock>, CollapseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let blocks = networks
        .into_iter()
        .map(|s| parse(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    collapse(&blocks)
}

/// Aligned blocks exactly covering `[start, end]`, in ascending order.
fn cover_range(start: u64, end: u64) -> Vec<AddressBlock> {
    let mut blocks = Vec::new();
    let mut next = start;

    while next <= end {
        let prefix = find_biggest_block(next as u32, end - next + 1);
        blocks.push(AddressBlock::from_bits(next as u32, prefix));
        next += block_size(prefix);
    }

    blocks
}

/// Shortest prefix for a block starting at `start` holding at most `remaining`
/// addresses.
///
/// Constrained by:
/// 1. The alignment of `start`, which must be the block's network address
/// 2. The remaining length, so the block does not run past the interval
fn find_biggest_block(start: u32, remaining: u64) -> u8 {
    assert!(
        (1..=block_size(0)).contains(&remaining),
        "remaining[{remaining}] outside 1..=2^32 should never happen."
    );

    let min_mask_for_alignment = lo_mask(start);
    let largest_fit_bits = 63 - remaining.leading_zeros() as u8;
    let min_mask_for_length = MAX_LENGTH - largest_fit_bits;

    min_mask_for_alignment.max(min_mask_for_length)
}

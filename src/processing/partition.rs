//! Splitting a block into equal sub-blocks.

use crate::error::PartitionError;
use crate::models::{block_size, AddressBlock, MAX_LENGTH};
use std::iter::FusedIterator;

/// How to split a block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PartitionBy {
    /// Into this many sub-blocks; must be a power of two.
    Count(u64),
    /// Into sub-blocks of this prefix length; must be longer than the block's.
    NewPrefix(u8),
}

/// Lazily generated sub-blocks of one parent block, in ascending order.
///
/// A /0 split into /32s has 2^32 items; nothing is generated until asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnets {
    base: u32,
    prefix_len: u8,
    // Indices still to yield: [front, back)
    front: u64,
    back: u64,
}

impl Subnets {
    fn new(parent: AddressBlock, prefix_len: u8) -> Subnets {
        Subnets {
            base: parent.base(),
            prefix_len,
            front: 0,
            back: 1u64 << (prefix_len - parent.prefix_len()),
        }
    }

    /// Prefix length of every generated sub-block.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Sub-blocks not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }

    fn block_at(&self, idx: u64) -> AddressBlock {
        let offset = idx * block_size(self.prefix_len);
        AddressBlock::from_bits(self.base + offset as u32, self.prefix_len)
    }
}

impl Iterator for Subnets {
    type Item = AddressBlock;

    fn next(&mut self) -> Option<AddressBlock> {
        if self.front >= self.back {
            return None;
        }
        let block = self.block_at(self.front);
        self.front += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<AddressBlock> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }

    fn last(mut self) -> Option<AddressBlock> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Subnets {
    fn next_back(&mut self) -> Option<AddressBlock> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.block_at(self.back))
    }
}

impl FusedIterator for Subnets {}

/// Split `block` into equal sub-blocks covering it exactly.
///
/// Sub-block `i` has base `block.base + i * 2^(32 - new_prefix)`.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::{parse, partition, PartitionBy};
/// let subnets: Vec<String> = partition(parse("192.168.1.0/24").unwrap(), PartitionBy::Count(4))
///     .unwrap()
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(subnets[1], "192.168.1.64/26");
/// ```
pub fn partition(block: AddressBlock, by: PartitionBy) -> Result<Subnets, PartitionError> {
    let new_prefix = match by {
        PartitionBy::Count(count) => {
            if !count.is_power_of_two() {
                return Err(PartitionError::NotPowerOfTwo { count });
            }
            let bits_needed = count.trailing_zeros();
            let new_prefix = block.prefix_len() as u32 + bits_needed;
            if new_prefix > MAX_LENGTH as u32 {
                return Err(PartitionError::ExceedsAddressSpace {
                    requested: count,
                    max: block.num_addresses(),
                });
            }
            new_prefix as u8
        }
        PartitionBy::NewPrefix(new_prefix) => {
            if new_prefix <= block.prefix_len() {
                return Err(PartitionError::PrefixNotLarger {
                    new: new_prefix,
                    current: block.prefix_len(),
                });
            }
            if new_prefix > MAX_LENGTH {
                return Err(PartitionError::PrefixTooLong { prefix: new_prefix });
            }
            new_prefix
        }
    };

    Ok(Subnets::new(block, new_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse;

    fn block(s: &str) -> AddressBlock {
        parse(s).unwrap()
    }

    fn strings(subnets: Subnets) -> Vec<String> {
        subnets.map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_partition_by_count() {
        let subnets = partition(block("192.168.1.0/24"), PartitionBy::Count(4)).unwrap();
        assert_eq!(subnets.prefix_len(), 26);
        assert_eq!(subnets.remaining(), 4);
        assert_eq!(
            strings(subnets),
            vec![
                "192.168.1.0/26",
                "192.168.1.64/26",
                "192.168.1.128/26",
                "192.168.1.192/26"
            ]
        );
    }

    #[test]
    fn test_partition_by_prefix() {
        let subnets = partition(block("192.168.1.0/24"), PartitionBy::NewPrefix(26)).unwrap();
        assert_eq!(
            strings(subnets),
            vec![
                "192.168.1.0/26",
                "192.168.1.64/26",
                "192.168.1.128/26",
                "192.168.1.192/26"
            ]
        );
    }

    #[test]
    fn test_partition_count_one_is_identity() {
        let b = block("10.1.0.0/16");
        let subnets: Vec<_> = partition(b, PartitionBy::Count(1)).unwrap().collect();
        assert_eq!(subnets, vec![b]);
    }

    #[test]
    fn test_partition_not_power_of_two() {
        let b = block("192.168.1.0/24");
        for count in [0, 3, 6, 100] {
            assert_eq!(
                partition(b, PartitionBy::Count(count)),
                Err(PartitionError::NotPowerOfTwo { count })
            );
        }
    }

    #[test]
    fn test_partition_exceeds_address_space() {
        assert_eq!(
            partition(block("192.168.1.0/24"), PartitionBy::Count(512)),
            Err(PartitionError::ExceedsAddressSpace {
                requested: 512,
                max: 256
            })
        );
        assert_eq!(
            partition(block("10.0.0.1/32"), PartitionBy::Count(2)),
            Err(PartitionError::ExceedsAddressSpace {
                requested: 2,
                max: 1
            })
        );
        assert_eq!(
            partition(block("0.0.0.0/0"), PartitionBy::Count(1 << 33)),
            Err(PartitionError::ExceedsAddressSpace {
                requested: 1 << 33,
                max: 1 << 32
            })
        );
    }

    #[test]
    fn test_partition_prefix_errors() {
        let b = block("192.168.1.0/24");
        assert_eq!(
            partition(b, PartitionBy::NewPrefix(23)),
            Err(PartitionError::PrefixNotLarger { new: 23, current: 24 })
        );
        assert_eq!(
            partition(b, PartitionBy::NewPrefix(24)),
            Err(PartitionError::PrefixNotLarger { new: 24, current: 24 })
        );
        assert_eq!(
            partition(b, PartitionBy::NewPrefix(33)),
            Err(PartitionError::PrefixTooLong { prefix: 33 })
        );
    }

    #[test]
    fn test_partition_is_lazy() {
        let mut subnets = partition(block("0.0.0.0/0"), PartitionBy::NewPrefix(32)).unwrap();
        assert_eq!(subnets.remaining(), 1 << 32);
        assert_eq!(subnets.next().unwrap().to_string(), "0.0.0.0/32");
        assert_eq!(subnets.next().unwrap().to_string(), "0.0.0.1/32");
        assert_eq!(subnets.next_back().unwrap().to_string(), "255.255.255.255/32");
        assert_eq!(subnets.nth(254).unwrap().to_string(), "0.0.1.0/32");
        assert_eq!(subnets.remaining(), (1 << 32) - 258);
    }

    #[test]
    fn test_partition_last_block_of_address_space() {
        let subnets = partition(block("0.0.0.0/0"), PartitionBy::Count(2)).unwrap();
        assert_eq!(strings(subnets), vec!["0.0.0.0/1", "128.0.0.0/1"]);

        let last = partition(block("255.255.255.0/24"), PartitionBy::NewPrefix(30))
            .unwrap()
            .last()
            .unwrap();
        assert_eq!(last.to_string(), "255.255.255.252/30");
    }

    #[test]
    fn test_partition_coverage() {
        for parent in ["10.0.0.0/8", "192.168.4.0/22", "172.16.0.0/28", "1.2.3.4/31"] {
            let parent = block(parent);
            for new_prefix in parent.prefix_len() + 1..=(parent.prefix_len() + 8).min(32) {
                let subnets = partition(parent, PartitionBy::NewPrefix(new_prefix)).unwrap();
                let expected = 1u64 << (new_prefix - parent.prefix_len());
                assert_eq!(subnets.remaining(), expected);

                let subnets: Vec<_> = subnets.collect();
                assert_eq!(subnets.len() as u64, expected);
                assert_eq!(subnets[0].base(), parent.base());
                assert_eq!(subnets[subnets.len() - 1].last(), parent.last());
                for pair in subnets.windows(2) {
                    assert_eq!(pair[0].last() as u64 + 1, pair[1].base() as u64);
                }
                assert!(subnets.iter().all(|s| parent.contains(s)));
            }
        }
    }

    #[test]
    fn test_partition_is_repeatable() {
        let b = block("10.20.0.0/16");
        let first: Vec<_> = partition(b, PartitionBy::Count(64)).unwrap().collect();
        let second: Vec<_> = partition(b, PartitionBy::Count(64)).unwrap().collect();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }
}

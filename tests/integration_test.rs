//! Integration tests for ipv4-subnet-calc
//!
//! These tests drive the public API the way a front end would: parse first,
//! then hand the block to the other operations.

use ipv4_subnet_calc::{
    collapse, collapse_str, describe, minimal_prefix_for, parse, partition, AddressBlock,
    AddressClass, CollapseError, ParseError, PartitionBy, PartitionError, SizerError,
};
use std::net::Ipv4Addr;

#[test]
fn test_describe_192_168_1_0_24() {
    let block = parse("192.168.1.0/24").expect("valid network");
    assert_eq!(block.network(), Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(block.prefix_len(), 24);

    let info = describe(block);
    assert_eq!(info.broadcast, Ipv4Addr::new(192, 168, 1, 255));
    assert_eq!(info.mask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(info.wildcard, Ipv4Addr::new(0, 0, 0, 255));
    assert_eq!(info.class, AddressClass::C);
    assert_eq!(info.usable_hosts, 254);
    assert_eq!(info.first_host, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(info.last_host, Ipv4Addr::new(192, 168, 1, 254));
}

#[test]
fn test_partition_into_four() {
    let block = parse("192.168.1.0/24").unwrap();
    let subnets: Vec<AddressBlock> = partition(block, PartitionBy::Count(4)).unwrap().collect();
    let expected: Vec<AddressBlock> = [
        "192.168.1.0/26",
        "192.168.1.64/26",
        "192.168.1.128/26",
        "192.168.1.192/26",
    ]
    .iter()
    .map(|s| parse(s).unwrap())
    .collect();
    assert_eq!(subnets, expected);
}

#[test]
fn test_partition_into_three_fails() {
    let block = parse("192.168.1.0/24").unwrap();
    assert_eq!(
        partition(block, PartitionBy::Count(3)),
        Err(PartitionError::NotPowerOfTwo { count: 3 })
    );
}

#[test]
fn test_sizer_scenarios() {
    assert_eq!(minimal_prefix_for(100), Ok(25));
    assert_eq!(minimal_prefix_for(500), Ok(23));
    assert_eq!(minimal_prefix_for(0), Err(SizerError::NonPositive { hosts: 0 }));
}

#[test]
fn test_collapse_eight_contiguous_24s() {
    let blocks: Vec<AddressBlock> = (0..8)
        .map(|i| parse(&format!("10.10.{i}.0/24")).unwrap())
        .collect();
    assert_eq!(collapse(&blocks).unwrap(), vec![parse("10.10.0.0/21").unwrap()]);
}

#[test]
fn test_collapse_non_contiguous_stays_split() {
    let result = collapse_str(["192.168.3.0/24", "192.168.1.0/24"]).unwrap();
    assert_eq!(
        result,
        vec![parse("192.168.1.0/24").unwrap(), parse("192.168.3.0/24").unwrap()]
    );
}

#[test]
fn test_error_kinds_reach_the_caller() {
    assert!(matches!(parse("invalid_network"), Err(ParseError::Malformed { .. })));
    assert!(matches!(parse("10.0.0.0/33"), Err(ParseError::OutOfRange { .. })));
    assert_eq!(collapse(&[]), Err(CollapseError::EmptyInput));

    let block = parse("10.0.0.0/24").unwrap();
    assert!(matches!(
        partition(block, PartitionBy::NewPrefix(20)),
        Err(PartitionError::PrefixNotLarger { .. })
    ));
    assert!(matches!(
        partition(block, PartitionBy::NewPrefix(40)),
        Err(PartitionError::PrefixTooLong { .. })
    ));
    assert_eq!(
        partition(block, PartitionBy::Count(1024)),
        Err(PartitionError::ExceedsAddressSpace {
            requested: 1024,
            max: 256
        })
    );
}

#[test]
fn test_degenerate_prefixes_keep_separate_rules() {
    // Descriptor: every address of a /31 is usable
    assert_eq!(describe(parse("10.0.0.0/31").unwrap()).usable_hosts, 2);
    // Sizer: two hosts still reserve network and broadcast
    assert_eq!(minimal_prefix_for(2), Ok(30));
}

#[test]
fn test_partition_then_collapse_restores_parent() {
    for network in ["10.0.0.0/8", "172.16.32.0/20", "192.168.7.128/25"] {
        let parent = parse(network).unwrap();
        for new_prefix in parent.prefix_len() + 1..=(parent.prefix_len() + 6) {
            let subnets: Vec<AddressBlock> = partition(parent, PartitionBy::NewPrefix(new_prefix))
                .unwrap()
                .collect();
            assert_eq!(collapse(&subnets).unwrap(), vec![parent]);

            // dropping one subnet leaves a gap that must not be bridged
            let without_second: Vec<AddressBlock> = subnets
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != 1)
                .map(|(_, b)| *b)
                .collect();
            let collapsed = collapse(&without_second).unwrap();
            assert!(!collapsed.contains(&parent));
            assert!(collapsed.iter().all(|b| !b.contains(&subnets[1])));
        }
    }
}

#[test]
fn test_blocks_are_shareable_across_threads() {
    let block = parse("10.0.0.0/16").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || partition(block, PartitionBy::Count(256)).unwrap().count()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 256);
    }
}

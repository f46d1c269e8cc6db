// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for ipnumbers
//!
//! These tests exercise the public API end to end: parse, range math, enumeration.

use ipnumbers::{
    collapse_ipv6, expand_ipv6, CidrRange, ErrorKind, IpNumber, Ipv4, Ipv4CidrRange, Ipv4Prefix,
    Ipv6, Ipv6CidrRange,
};
use ipnumbers::bits;
use num_bigint::BigUint;

const V4_SAMPLES: [&str; 6] = [
    "0.0.0.0",
    "10.0.0.1",
    "127.0.0.1",
    "192.168.100.200",
    "224.0.0.251",
    "255.255.255.255",
];

const V6_SAMPLES: [&str; 7] = [
    "::",
    "::1",
    "1::",
    "2001:db8::",
    "2001:db8:0:0:1:0:0:1",
    "fe80::1:2:3:4",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
];

#[test]
fn test_ipv4_string_round_trip() {
    for s in V4_SAMPLES {
        let ip: Ipv4 = s.parse().unwrap();
        let again: Ipv4 = ip.to_string().parse().unwrap();
        assert_eq!(again.to_string(), ip.to_string(), "Failed: '{s}'");
        assert_eq!(Ipv4::from_binary_string(&ip.to_binary_string()).unwrap(), ip);
    }
}

#[test]
fn test_ipv6_zero_run_round_trip() {
    for s in V6_SAMPLES {
        let expanded: String = expand_ipv6(s).unwrap();
        let collapsed: String = collapse_ipv6(&expanded).unwrap();
        assert_eq!(expand_ipv6(&collapsed).unwrap(), expanded, "Failed: '{s}'");
        assert!(collapsed.matches("::").count() <= 1);
    }
}

#[test]
fn test_split_halves() {
    for cidr in ["10.0.0.0/8", "192.168.1.0/24", "0.0.0.0/0", "10.0.0.0/31"] {
        let range: Ipv4CidrRange = cidr.parse().unwrap();
        let [lower, upper] = range.split().unwrap();

        assert!(lower.is_consecutive(&upper), "Failed: '{cidr}'");
        assert_eq!(lower.size() * 2u32, range.size());
        assert_eq!(upper.size() * 2u32, range.size());
        assert_eq!(lower.first(), range.first());
        assert_eq!(upper.last(), range.last());
        assert!(range.contains(&lower) && range.contains(&upper));
    }

    let range: Ipv6CidrRange = "2001:db8::/127".parse().unwrap();
    let [lower, upper] = range.split().unwrap();
    let mut union: Vec<Ipv6> = lower.iter().chain(upper.iter()).collect();
    union.sort();
    assert_eq!(union, range.iter().collect::<Vec<Ipv6>>());
}

#[test]
fn test_split_single_address_fails() {
    let v4: Ipv4CidrRange = "10.0.0.1/32".parse().unwrap();
    assert_eq!(v4.split().unwrap_err().kind(), ErrorKind::SplitIneligible);
    let v6: Ipv6CidrRange = "::1/128".parse().unwrap();
    assert_eq!(v6.split().unwrap_err().kind(), ErrorKind::SplitIneligible);
}

#[test]
fn test_self_relations() {
    for cidr in ["10.0.0.0/8", "192.168.1.128/25", "1.2.3.4/32"] {
        let range: Ipv4CidrRange = cidr.parse().unwrap();
        assert!(range.contains(&range));
        assert!(!range.is_overlapping(&range));
    }
}

#[test]
fn test_disjoint_aligned_blocks() {
    let a: Ipv4CidrRange = "10.0.0.0/26".parse().unwrap();
    let b: Ipv4CidrRange = "10.0.0.128/26".parse().unwrap();
    assert!(!a.contains(&b) && !b.contains(&a));
    assert!(!a.is_overlapping(&b) && !b.is_overlapping(&a));
}

#[test]
fn test_nested_is_not_overlap() {
    // base address with host bits, still normalized to 10.0.0.0/24
    let a: Ipv4CidrRange = "10.0.0.77/24".parse().unwrap();
    let b: Ipv4CidrRange = "10.0.0.0/23".parse().unwrap();
    assert!(!a.is_overlapping(&b));
    assert!(a.inside(&b));
}

#[test]
fn test_reference_range() {
    let range = Ipv4CidrRange::from_cidr("192.198.0.0/24").unwrap();
    assert_eq!(range.first().to_string(), "192.198.0.0");
    assert_eq!(range.last().to_string(), "192.198.0.255");
    assert_eq!(range.size(), BigUint::from(256u32));
    let taken: Vec<String> = range.take(3).unwrap().iter().map(|ip| ip.to_string()).collect();
    assert_eq!(taken, vec!["192.198.0.0", "192.198.0.1", "192.198.0.2"]);
}

#[test]
fn test_reference_consecutive() {
    let a = Ipv4CidrRange::from_cidr("192.168.0.0/25").unwrap();
    let b = Ipv4CidrRange::from_cidr("192.168.0.128/25").unwrap();
    let c = Ipv4CidrRange::from_cidr("192.168.0.127/25").unwrap();
    assert!(a.is_consecutive(&b) && b.is_consecutive(&a));
    assert!(!a.is_consecutive(&c));
}

#[test]
fn test_reference_ipv6_next() {
    let ip: Ipv6 = "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe".parse().unwrap();
    let next: Ipv6 = ip.next_address().unwrap();
    assert_eq!(next.to_string(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    assert_eq!(next.next_address().unwrap_err().kind(), ErrorKind::AddressBoundary);
}

#[test]
fn test_reference_ipv6_from_big_integer() {
    let value: BigUint = "42540766411282592856903984951653826560".parse().unwrap();
    let ip = Ipv6::from_big_uint(&value).unwrap();
    assert_eq!(ip.to_string(), "2001:db8:0:0:0:0:0:0");
    assert_eq!(ip.to_compressed_string(), "2001:db8::");
}

#[test]
fn test_multi_fault_report() {
    let err = Ipv4CidrRange::from_cidr("192.198.333.0/66").unwrap_err();
    assert_eq!(err.faults().len(), 2);
    assert!(err.faults().iter().all(|f| f.kind() == ErrorKind::RangeBounds));
    assert!(err.to_string().contains(" and "));
}

#[test]
fn test_generic_over_family() {
    fn block_count<N: IpNumber>(range: &CidrRange<N>) -> usize {
        range.iter().count()
    }
    let v4 = CidrRange::new(Ipv4::from(0x0a00_0000u32), Ipv4Prefix::new(29).unwrap());
    let v6: Ipv6CidrRange = "fe80::/125".parse().unwrap();
    assert_eq!(block_count(&v4), 8);
    assert_eq!(block_count(&v6), 8);
}

#[test]
fn test_bit_helpers_agree_with_addresses() {
    for s in V6_SAMPLES {
        let ip: Ipv6 = s.parse().unwrap();
        let binary: String = bits::hexadecatet_notation_to_binary(s).unwrap();
        assert_eq!(binary, ip.to_binary_string(), "Failed: '{s}'");

        let groups: Vec<String> = binary
            .as_bytes()
            .chunks(16)
            .map(|chunk| bits::binary_to_hex(std::str::from_utf8(chunk).unwrap()).unwrap())
            .collect();
        assert_eq!(groups.join(":"), ip.to_expanded_string());
        for group in &groups {
            assert_eq!(bits::hex_to_binary(group).unwrap().len(), 16);
        }
    }
}

#[test]
fn test_oversized_groups_rejected() {
    for s in ["0ffff::1", "00000::1", "000000000000ffff::"] {
        assert_eq!(s.parse::<Ipv6>().unwrap_err().kind(), ErrorKind::StructuralParse);
    }
    assert_eq!(
        "0000000010.0.0.1".parse::<Ipv4>().unwrap_err().kind(),
        ErrorKind::StructuralParse
    );
}

// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    groups::Octet, ipv6::Ipv6, number::IpNumber, strings::*, validator, AddressError, IPV4_BITS,
    OCTET_BITS,
};
use num_bigint::BigUint;
use std::{fmt, str::FromStr};
use tracing::debug;

const IPV4_MAPPED_PREFIX: u128 = 0xffff << 32;

/// 32-bit IPv4 number, rendered in dotted-decimal notation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ipv4(u32);

impl Ipv4 {
    pub const MIN: Ipv4 = Ipv4(0);
    pub const MAX: Ipv4 = Ipv4(u32::MAX);

    /// Parse `d.d.d.d` where each `d` is a decimal octet `<= 255`.
    pub fn from_dotted_decimal(ip: &str) -> Result<Self, AddressError> {
        let octets: [u8; 4] = validator::validate_dotted_decimal(ip)
            .inspect_err(|e| debug!(input = ip, error = %e, "rejected IPv4 address"))?;
        Ok(Self(u32::from_be_bytes(octets)))
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [Octet; 4] {
        self.0.to_be_bytes().map(Octet::from)
    }

    /// The IPv4-mapped IPv6 address `::ffff:a.b.c.d`.
    pub fn to_ipv4_mapped_ipv6(&self) -> Ipv6 {
        Ipv6::from(IPV4_MAPPED_PREFIX | self.0 as u128)
    }
}

impl IpNumber for Ipv4 {
    const BIT_SIZE: u8 = IPV4_BITS;
    const GROUP_BITS: u8 = OCTET_BITS;
    const MAX_VALUE: u128 = u32::MAX as u128;

    fn from_value(value: u128) -> Result<Self, AddressError> {
        validator::validate_ipv4_value(value)?;
        Ok(Self(value as u32))
    }

    fn from_big_uint(value: &BigUint) -> Result<Self, AddressError> {
        match u32::try_from(value) {
            Ok(v) => Ok(Self(v)),
            Err(_) => Err(AddressError::Ipv4Value(value.to_string())),
        }
    }

    fn from_value_masked(value: u128) -> Self {
        Self(value as u32)
    }

    fn value(&self) -> u128 {
        self.0 as u128
    }
}

impl From<u32> for Ipv4 {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ipv4> for u32 {
    fn from(ip: Ipv4) -> Self {
        ip.0
    }
}

impl FromStr for Ipv4 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dotted_decimal(s)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets: Vec<String> = self.group_values().iter().map(|o| o.to_string()).collect();
        f.write_str(&octets.join(DOT))
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_1: &str = "192.168.1.1";
    const TEST_ZERO: &str = "0.0.0.0";
    const TEST_MAX: &str = "255.255.255.255";
    const TEST_BAD: &str = "192.198.333.0";

    #[test]
    fn test_parse_and_display() {
        let ip: Ipv4 = TEST_1.parse().unwrap();
        assert_eq!(ip.value(), 0xc0a8_0101);
        assert_eq!(ip.to_string(), TEST_1);
        assert_eq!("010.001.0.00".parse::<Ipv4>().unwrap().to_string(), "10.1.0.0");
        assert_eq!(TEST_ZERO.parse::<Ipv4>().unwrap(), Ipv4::MIN);
        assert_eq!(TEST_MAX.parse::<Ipv4>().unwrap(), Ipv4::MAX);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            TEST_BAD.parse::<Ipv4>(),
            Err(AddressError::Octet("333".into()))
        );
        assert!("1.2.3".parse::<Ipv4>().is_err());
        assert!("1.2.3.4/24".parse::<Ipv4>().is_err());
        assert!("".parse::<Ipv4>().is_err());
        assert_eq!(
            "0000000010.0.0.1".parse::<Ipv4>(),
            Err(AddressError::DottedDecimalFmt("0000000010.0.0.1".into()))
        );
    }

    #[test]
    fn test_octets() {
        let ip: Ipv4 = TEST_1.parse().unwrap();
        let octets: Vec<u8> = ip.octets().iter().map(|o| o.value()).collect();
        assert_eq!(octets, vec![192, 168, 1, 1]);
        assert_eq!(Ipv4::group_count(), 4);
        assert_eq!(ip.group_values(), vec![192, 168, 1, 1]);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Ipv4::from_value(0xc0a8_0101).unwrap().to_string(), TEST_1);
        assert_eq!(
            Ipv4::from_value(1 << 32),
            Err(AddressError::Ipv4Value("4294967296".into()))
        );
        assert_eq!(
            Ipv4::from_big_uint(&BigUint::from(u32::MAX)).unwrap(),
            Ipv4::MAX
        );
        assert!(Ipv4::from_big_uint(&(BigUint::from(u32::MAX) + 1u32)).is_err());
    }

    #[test]
    fn test_binary_string() {
        let ip = Ipv4::from_binary_string("11000000101010000000000100000001").unwrap();
        assert_eq!(ip.to_string(), TEST_1);
        assert_eq!(ip.to_binary_string(), "11000000101010000000000100000001");
        assert_eq!(Ipv4::from_binary_string("1").unwrap().to_string(), "0.0.0.1");
        assert!(Ipv4::from_binary_string(&"1".repeat(33)).is_err());
    }

    #[test]
    fn test_next_previous() {
        let ip: Ipv4 = "10.0.0.255".parse().unwrap();
        assert_eq!(ip.next_address().unwrap().to_string(), "10.0.1.0");
        assert_eq!(ip.previous_address().unwrap().to_string(), "10.0.0.254");
        assert!(!Ipv4::MAX.has_next());
        assert!(!Ipv4::MIN.has_previous());
        assert_eq!(
            Ipv4::MAX.next_address(),
            Err(AddressError::NoNextAddress(TEST_MAX.into()))
        );
        assert_eq!(
            Ipv4::MIN.previous_address(),
            Err(AddressError::NoPreviousAddress(TEST_ZERO.into()))
        );
    }

    #[test]
    fn test_ordering() {
        let a: Ipv4 = "10.0.0.1".parse().unwrap();
        let b: Ipv4 = "10.0.0.2".parse().unwrap();
        assert!(a < b);
        assert!(a <= a);
        assert!(b > a);
        assert!(b >= a);
        assert_eq!(a, "10.0.0.1".parse().unwrap());
    }

    #[test]
    fn test_ipv4_mapped_ipv6() {
        let ip: Ipv4 = "192.168.1.1".parse().unwrap();
        assert_eq!(
            ip.to_ipv4_mapped_ipv6().to_string(),
            "0:0:0:0:0:ffff:c0a8:101"
        );
    }
}

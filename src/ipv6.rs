// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    groups::Hexadecatet, ipv4::Ipv4, number::IpNumber, strings::*, validator, AddressError,
    HEXADECATET_BITS, IPV6_BITS,
};
use num_bigint::BigUint;
use std::{fmt, str::FromStr};
use tracing::debug;

/// 128-bit IPv6 number, rendered in colon-hex notation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ipv6(u128);

impl Ipv6 {
    pub const MIN: Ipv6 = Ipv6(0);
    pub const MAX: Ipv6 = Ipv6(u128::MAX);

    /**
    Parse colon-hex notation: 8 groups of 1-4 hex digits, where a single `::`
    may replace one or more all-zero groups. Hex digits are case-insensitive.
    */
    pub fn from_colon_hex(ip: &str) -> Result<Self, AddressError> {
        let groups: [u16; 8] = validator::validate_colon_hex(ip)
            .inspect_err(|e| debug!(input = ip, error = %e, "rejected IPv6 address"))?;
        Ok(Self(
            groups
                .iter()
                .fold(0u128, |acc, &g| (acc << HEXADECATET_BITS) | g as u128),
        ))
    }

    /// IPv4-mapped address of `ipv4`, i.e. `::ffff:a.b.c.d`.
    pub fn from_ipv4(ipv4: Ipv4) -> Self {
        ipv4.to_ipv4_mapped_ipv6()
    }

    /// IPv4-mapped address of a dotted-decimal IPv4 string.
    pub fn from_ipv4_dotted_decimal(ip: &str) -> Result<Self, AddressError> {
        Ok(Ipv4::from_dotted_decimal(ip)?.to_ipv4_mapped_ipv6())
    }

    fn segments(&self) -> [u16; 8] {
        let groups: Vec<u16> = self.group_values();
        std::array::from_fn(|i| groups[i])
    }

    /// The eight hexadecatets, most significant first.
    pub fn hexadecatets(&self) -> [Hexadecatet; 8] {
        self.segments().map(Hexadecatet::from)
    }

    /// All 8 groups with 4 digits each, f.ex. `2001:0db8:0000:0000:0000:0000:0000:0001`.
    pub fn to_expanded_string(&self) -> String {
        self.hexadecatets()
            .iter()
            .map(|h| h.to_padded_string())
            .collect::<Vec<String>>()
            .join(COLON)
    }

    /**
    Canonical short form: leading zeros dropped and the longest run of all-zero
    groups replaced by `::`. On a tie the leftmost run wins.

    `2001:db8:0:0:1:0:0:1` becomes `2001:db8::1:0:0:1`.
    */
    pub fn to_compressed_string(&self) -> String {
        let segments: [u16; 8] = self.segments();
        let join = |groups: &[u16]| -> String {
            groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<String>>()
                .join(COLON)
        };

        match longest_zero_run(&segments) {
            Some((start, len)) => format!(
                "{}{DOUBLE_COLON}{}",
                join(&segments[..start]),
                join(&segments[start + len..])
            ),
            None => join(&segments),
        }
    }
}

/// `(start, length)` of the first longest run of zero groups, if any.
fn longest_zero_run(segments: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i: usize = 0;
    while i < segments.len() {
        if segments[i] != 0 {
            i += 1;
            continue;
        }
        let start: usize = i;
        while i < segments.len() && segments[i] == 0 {
            i += 1;
        }
        let len: usize = i - start;
        if best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best
}

/// Expand a colon-hex IPv6 string to 8 groups of 4 lowercase hex digits.
pub fn expand_ipv6(ip: &str) -> Result<String, AddressError> {
    Ok(Ipv6::from_colon_hex(ip)?.to_expanded_string())
}

/// Collapse a colon-hex IPv6 string to its canonical `::` compressed form.
pub fn collapse_ipv6(ip: &str) -> Result<String, AddressError> {
    Ok(Ipv6::from_colon_hex(ip)?.to_compressed_string())
}

impl IpNumber for Ipv6 {
    const BIT_SIZE: u8 = IPV6_BITS;
    const GROUP_BITS: u8 = HEXADECATET_BITS;
    const MAX_VALUE: u128 = u128::MAX;

    fn from_value(value: u128) -> Result<Self, AddressError> {
        Ok(Self(value))
    }

    fn from_big_uint(value: &BigUint) -> Result<Self, AddressError> {
        validator::validate_ipv6_value(value)?;
        u128::try_from(value)
            .map(Self)
            .map_err(|_| AddressError::Ipv6Value(value.to_string()))
    }

    fn from_value_masked(value: u128) -> Self {
        Self(value)
    }

    fn value(&self) -> u128 {
        self.0
    }
}

impl From<u128> for Ipv6 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Ipv6> for u128 {
    fn from(ip: Ipv6) -> Self {
        ip.0
    }
}

impl From<Ipv4> for Ipv6 {
    fn from(ipv4: Ipv4) -> Self {
        Self::from_ipv4(ipv4)
    }
}

impl FromStr for Ipv6 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_colon_hex(s)
    }
}

/// 8 groups without leading zeros and without `::` compression, f.ex. `2001:db8:0:0:0:0:0:1`.
/// See [Ipv6::to_compressed_string] for the short form.
impl fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, g) in self.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(COLON)?;
            }
            write!(f, "{g:x}")?;
        }
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */

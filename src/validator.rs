// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Structural and numeric checks shared by every constructor in the crate.

All functions are pure: they either return `Ok` (possibly with the parsed
groups) or the [AddressError] describing the first fault found. Callers
that check several independent parts of one input aggregate the faults.
*/

use crate::{strings::*, AddressError, IPV6_BITS};
use lazy_static::lazy_static;
use num_bigint::BigUint;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref DOTTED_DECIMAL: Regex = Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").unwrap();
    static ref HEX_GROUP: Regex = Regex::new(r"^[0-9a-fA-F]{1,4}$").unwrap();
    static ref BINARY_DIGITS: Regex = Regex::new(r"^[01]+$").unwrap();
}

const IPV4_GROUPS: usize = 4;
const IPV6_GROUPS: usize = 8;

/// Octet values must fit in 8 bits.
pub fn validate_octet(value: u128) -> Result<(), AddressError> {
    if value > u8::MAX as u128 {
        return Err(AddressError::Octet(value.to_string()));
    }
    Ok(())
}

/// Hexadecatet values must fit in 16 bits.
pub fn validate_hexadecatet(value: u128) -> Result<(), AddressError> {
    if value > u16::MAX as u128 {
        return Err(AddressError::Hexadecatet(format!("{value:x}")));
    }
    Ok(())
}

/// Prefix length must be within `0..=bits`.
pub fn validate_prefix(length: u128, bits: u8) -> Result<(), AddressError> {
    if length > bits as u128 {
        return Err(AddressError::Prefix {
            length: length.to_string(),
            bits,
        });
    }
    Ok(())
}

/// Prefix length given as a string: must be a decimal number within `0..=bits`.
pub fn validate_prefix_str(length: &str, bits: u8) -> Result<u8, AddressError> {
    let err = || AddressError::Prefix {
        length: length.into(),
        bits,
    };
    if length.is_empty() || !length.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let val: u128 = length.parse().map_err(|_| err())?;
    validate_prefix(val, bits)?;
    Ok(val as u8)
}

/// IPv4 values must fit in 32 bits.
pub fn validate_ipv4_value(value: u128) -> Result<(), AddressError> {
    if value > u32::MAX as u128 {
        return Err(AddressError::Ipv4Value(value.to_string()));
    }
    Ok(())
}

/// IPv6 values must fit in 128 bits.
pub fn validate_ipv6_value(value: &BigUint) -> Result<(), AddressError> {
    if value.bits() > IPV6_BITS as u64 {
        return Err(AddressError::Ipv6Value(value.to_string()));
    }
    Ok(())
}

/**
Check a dotted-decimal string: exactly 4 dot-separated decimal octets of
1-3 digits, each `<= 255`.

### Returns
- the parsed octets, most significant first.
*/
pub fn validate_dotted_decimal(ip: &str) -> Result<[u8; 4], AddressError> {
    if !DOTTED_DECIMAL.is_match(ip) {
        return Err(AddressError::DottedDecimalFmt(ip.into()));
    }

    let mut octets = [0u8; IPV4_GROUPS];
    for (i, part) in ip.split(DOT).enumerate() {
        let val: u128 = part
            .parse()
            .map_err(|_| AddressError::Octet(part.into()))?;
        validate_octet(val)?;
        octets[i] = val as u8;
    }
    Ok(octets)
}

/**
Check a colon-hex string: 8 colon-separated groups of hex digits, where a single
`::` may stand in for one or more all-zero groups.

### Returns
- the expanded hexadecatets, most significant first.
*/
pub fn validate_colon_hex(ip: &str) -> Result<[u16; 8], AddressError> {
    let fmt_err = || AddressError::ColonHexFmt(ip.into());

    let compressions: usize = ip.matches(DOUBLE_COLON).count();
    if compressions > 1 {
        return Err(AddressError::DoubleColon(ip.into()));
    }

    let (left, right): (Vec<&str>, Vec<&str>) = match ip.split_once(DOUBLE_COLON) {
        Some((l, r)) => (split_groups(l), split_groups(r)),
        None => (ip.split(COLON).collect(), Vec::new()),
    };

    let given: usize = left.len() + right.len();
    if compressions == 1 {
        // '::' stands for at least one group
        if given >= IPV6_GROUPS {
            return Err(fmt_err());
        }
    } else if given != IPV6_GROUPS {
        return Err(fmt_err());
    }

    let mut groups = [0u16; IPV6_GROUPS];
    let right_start: usize = IPV6_GROUPS - right.len();
    for (i, group) in left.iter().enumerate() {
        groups[i] = parse_hexadecatet(group).ok_or_else(fmt_err)?;
    }
    for (i, group) in right.iter().enumerate() {
        groups[right_start + i] = parse_hexadecatet(group).ok_or_else(fmt_err)?;
    }
    Ok(groups)
}

/// Split one side of a `::` into its groups; an empty side has none.
fn split_groups(side: &str) -> Vec<&str> {
    if side.is_empty() {
        Vec::new()
    } else {
        side.split(COLON).collect()
    }
}

/// Parse a single group of 1-4 hex digits. `None` for anything else, leading zeros included.
pub(crate) fn parse_hexadecatet(group: &str) -> Option<u16> {
    if !HEX_GROUP.is_match(group) {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

/// Binary strings must be non-empty, consist of `0`/`1` only and be at most `bits` long.
pub fn validate_binary_string(binary: &str, bits: u8) -> Result<(), AddressError> {
    if binary.len() > bits as usize || !BINARY_DIGITS.is_match(binary) {
        return Err(AddressError::BinaryFmt {
            input: binary.into(),
            bits,
        });
    }
    Ok(())
}

/// A take count must be non-negative and not exceed the size of the range.
pub fn validate_take(count: i128, size: &BigUint) -> Result<(), AddressError> {
    if count < 0 {
        return Err(AddressError::TakeNegative(count));
    }
    if BigUint::from(count as u128) > *size {
        return Err(AddressError::TakeSize {
            count,
            size: size.clone(),
        });
    }
    Ok(())
}

/// A range can only be split while its prefix length is below the bit size.
pub fn validate_split(range: &impl fmt::Display, length: u8, bits: u8) -> Result<(), AddressError> {
    if length >= bits {
        return Err(AddressError::Split(range.to_string()));
    }
    Ok(())
}

/* -------------------------------------------------------------------------- */

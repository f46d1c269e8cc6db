// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between integers, binary strings and hexadecimal strings.
//!
//! These are standalone public helpers for callers working with the textual
//! bit forms of addresses. The address types themselves render their groups
//! directly from the numeric value; the results agree, f.ex.
//! `hexadecatet_notation_to_binary(ip)` equals the [IpNumber](crate::IpNumber)
//! binary string of the parsed [Ipv6](crate::Ipv6).

use crate::{strings::*, validator, AddressError, IPV6_BITS};

/**
Render `value` as an unsigned binary string, left-padded with zeros to `width` digits.

### Errors
- [AddressError::Width] if `value` needs more than `width` bits.
*/
pub fn to_binary_string(value: u128, width: u8) -> Result<String, AddressError> {
    if width < IPV6_BITS && value >> width != 0 {
        return Err(AddressError::Width { value, width });
    }
    Ok(format!("{value:0>w$b}", w = width as usize))
}

/// Left-pad a binary string with `0` up to `width` digits. Longer input is returned as is.
pub fn left_pad_with_zero_bits(binary: &str, width: usize) -> String {
    format!("{binary:0>width$}")
}

/// Parse a binary string of at most 128 digits.
pub fn parse_binary_string(binary: &str) -> Result<u128, AddressError> {
    validator::validate_binary_string(binary, IPV6_BITS)?;
    u128::from_str_radix(binary, 2).map_err(|_| AddressError::BinaryFmt {
        input: binary.into(),
        bits: IPV6_BITS,
    })
}

/**
Convert a binary string to lowercase hexadecimal, one hex digit per 4 binary digits.

Input whose length is not a multiple of 4 is left-padded with zeros first,
so `"101"` becomes `"5"` and `"00010000"` becomes `"10"`.
*/
pub fn binary_to_hex(binary: &str) -> Result<String, AddressError> {
    validator::validate_binary_string(binary, IPV6_BITS)?;
    let width: usize = binary.len().div_ceil(4) * 4;
    let padded: String = left_pad_with_zero_bits(binary, width);

    let mut out = String::with_capacity(width / 4);
    for nibble in padded.as_bytes().chunks(4) {
        let val: u32 = nibble
            .iter()
            .fold(0u32, |acc, &b| (acc << 1) | u32::from(b == b'1'));
        // nibble is always < 16
        if let Some(c) = char::from_digit(val, 16) {
            out.push(c);
        }
    }
    Ok(out)
}

/// Convert a hexadecimal string to binary, 4 binary digits per hex digit.
pub fn hex_to_binary(hex: &str) -> Result<String, AddressError> {
    if hex.is_empty() {
        return Err(AddressError::HexFmt(hex.into()));
    }
    let mut out = String::with_capacity(hex.len() * 4);
    for c in hex.chars() {
        let digit: u32 = c
            .to_digit(16)
            .ok_or_else(|| AddressError::HexFmt(hex.into()))?;
        out.push_str(&format!("{digit:04b}"));
    }
    Ok(out)
}

/**
Convert an expanded or abbreviated colon-hex IPv6 string to its 128 digit binary form.

Each hexadecatet is padded to 16 binary digits.
*/
pub fn hexadecatet_notation_to_binary(ipv6: &str) -> Result<String, AddressError> {
    let expanded: String = crate::expand_ipv6(ipv6)?;
    let mut out = String::with_capacity(IPV6_BITS as usize);
    for group in expanded.split(COLON) {
        out.push_str(&hex_to_binary(group)?);
    }
    Ok(out)
}

/* -------------------------------------------------------------------------- */

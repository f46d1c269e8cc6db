// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{bits, validator, AddressError};
use num_bigint::BigUint;
use std::{fmt, hash::Hash, str::FromStr};

/**
Capabilities shared by [Ipv4](crate::Ipv4) and [Ipv6](crate::Ipv6) numbers.

An IP number is an immutable unsigned integer within `0..=MAX_VALUE`.
Ordering and equality are those of the numeric value.
*/
pub trait IpNumber:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = AddressError>
{
    /// **v4**: 32, **v6**: 128
    const BIT_SIZE: u8;
    /// **v4**: 8 (octets), **v6**: 16 (hexadecatets)
    const GROUP_BITS: u8;
    const MAX_VALUE: u128;

    /// Create from a numeric value, failing if it is above [Self::MAX_VALUE].
    fn from_value(value: u128) -> Result<Self, AddressError>;

    /// Create from an arbitrary-precision value, failing if it is above [Self::MAX_VALUE].
    fn from_big_uint(value: &BigUint) -> Result<Self, AddressError>;

    /// Create from `value` masked down to [Self::BIT_SIZE] bits.
    fn from_value_masked(value: u128) -> Self;

    fn value(&self) -> u128;

    fn to_big_uint(&self) -> BigUint {
        BigUint::from(self.value())
    }

    /// Number of groups the address is displayed as.
    fn group_count() -> usize {
        (Self::BIT_SIZE / Self::GROUP_BITS) as usize
    }

    /// Group values, most significant first. Concatenated they give [Self::value].
    fn group_values(&self) -> Vec<u16> {
        let mask: u128 = (1u128 << Self::GROUP_BITS) - 1;
        (1..=Self::group_count())
            .map(|i| {
                let shift: usize = Self::BIT_SIZE as usize - Self::GROUP_BITS as usize * i;
                ((self.value() >> shift) & mask) as u16
            })
            .collect()
    }

    /// Create from a binary string of at most [Self::BIT_SIZE] digits, left-padded with zeros.
    fn from_binary_string(binary: &str) -> Result<Self, AddressError> {
        validator::validate_binary_string(binary, Self::BIT_SIZE)?;
        Self::from_value(bits::parse_binary_string(binary)?)
    }

    /// [Self::BIT_SIZE] binary digits.
    fn to_binary_string(&self) -> String {
        bits::left_pad_with_zero_bits(&format!("{:b}", self.value()), Self::BIT_SIZE as usize)
    }

    fn has_next(&self) -> bool {
        self.value() < Self::MAX_VALUE
    }

    fn has_previous(&self) -> bool {
        self.value() > 0
    }

    /// The number one above this one. Fails at the top of the address space.
    fn next_address(&self) -> Result<Self, AddressError> {
        if !self.has_next() {
            return Err(AddressError::NoNextAddress(self.to_string()));
        }
        Ok(Self::from_value_masked(self.value() + 1))
    }

    /// The number one below this one. Fails at zero.
    fn previous_address(&self) -> Result<Self, AddressError> {
        if !self.has_previous() {
            return Err(AddressError::NoPreviousAddress(self.to_string()));
        }
        Ok(Self::from_value_masked(self.value() - 1))
    }
}

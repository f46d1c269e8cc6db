// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{validator, AddressError};
use std::{fmt, str::FromStr};

/// 8-bit group of an IPv4 address, rendered in decimal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Octet(u8);

/// 16-bit group of an IPv6 address, rendered as 1-4 lowercase hex digits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hexadecatet(u16);

impl Octet {
    /// Create an [Octet], failing if `value > 255`.
    pub fn new(value: u128) -> Result<Self, AddressError> {
        validator::validate_octet(value)?;
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Hexadecatet {
    /// Create a [Hexadecatet], failing if `value > 0xffff`.
    pub fn new(value: u128) -> Result<Self, AddressError> {
        validator::validate_hexadecatet(value)?;
        Ok(Self(value as u16))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Four hex digits, zero padded, f.ex. `0db8`.
    pub fn to_padded_string(&self) -> String {
        format!("{:04x}", self.0)
    }
}

impl From<u8> for Octet {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<u16> for Hexadecatet {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl FromStr for Octet {
    type Err = AddressError;

    /// 1-3 decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddressError::Octet(s.into()));
        }
        let val: u128 = s.parse().map_err(|_| AddressError::Octet(s.into()))?;
        Self::new(val)
    }
}

impl FromStr for Hexadecatet {
    type Err = AddressError;

    /// 1-4 hex digits, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::parse_hexadecatet(s)
            .map(Self)
            .ok_or_else(|| AddressError::Hexadecatet(s.into()))
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Hexadecatet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/* -------------------------------------------------------------------------- */

// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{ipv4::Ipv4, ipv6::Ipv6, number::IpNumber, validator, AddressError};
use num_bigint::BigUint;
use std::{fmt, marker::PhantomData, str::FromStr};

/// CIDR prefix length for the address family `N`. **v4**: `0..=32`, **v6**: `0..=128`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Prefix<N: IpNumber> {
    length: u8,
    family: PhantomData<N>,
}

pub type Ipv4Prefix = Prefix<Ipv4>;
pub type Ipv6Prefix = Prefix<Ipv6>;

impl<N: IpNumber> Prefix<N> {
    pub fn new(length: u8) -> Result<Self, AddressError> {
        validator::validate_prefix(length as u128, N::BIT_SIZE)?;
        Ok(Self {
            length,
            family: PhantomData,
        })
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Mask with the low `BIT_SIZE - length` bits set.
    pub fn host_mask_value(&self) -> u128 {
        let host_bits: u8 = N::BIT_SIZE - self.length;
        if host_bits >= 128 {
            return u128::MAX;
        }
        (1u128 << host_bits) - 1
    }

    /// Mask with the top `length` bits set, the rest zero.
    pub fn netmask_value(&self) -> u128 {
        N::MAX_VALUE ^ self.host_mask_value()
    }

    /// The netmask as an address, f.ex. `255.255.255.0` for a v4 /24.
    pub fn netmask(&self) -> N {
        N::from_value_masked(self.netmask_value())
    }

    /**
    Prefix whose netmask is `mask`.

    ### Errors
    - [AddressError::Netmask] if the set bits of `mask` are not contiguous from the top.
    */
    pub fn from_netmask(mask: N) -> Result<Self, AddressError> {
        let host: u128 = N::MAX_VALUE ^ mask.value();
        let contiguous: bool = match host.checked_add(1) {
            Some(next) => host & next == 0,
            None => true,
        };
        if !contiguous {
            return Err(AddressError::Netmask(mask.to_string()));
        }
        Self::new(N::BIT_SIZE - host.count_ones() as u8)
    }

    /// Number of addresses covered: `2^(BIT_SIZE - length)`.
    pub fn size(&self) -> BigUint {
        BigUint::from(1u8) << (N::BIT_SIZE - self.length) as usize
    }
}

impl<N: IpNumber> TryFrom<u8> for Prefix<N> {
    type Error = AddressError;

    fn try_from(length: u8) -> Result<Self, Self::Error> {
        Self::new(length)
    }
}

impl<N: IpNumber> FromStr for Prefix<N> {
    type Err = AddressError;

    /// Decimal digits only, f.ex. `24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(validator::validate_prefix_str(s, N::BIT_SIZE)?)
    }
}

impl<N: IpNumber> fmt::Display for Prefix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.length)
    }
}

/* -------------------------------------------------------------------------- */

// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions to and from [std::net], [ipnet] and [serde].

use crate::{
    number::IpNumber, prefix::Prefix, range::CidrRange, AddressError, Ipv4, Ipv4CidrRange, Ipv6,
    Ipv6CidrRange,
};
use ipnet::{Ipv4Net, Ipv6Net};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::net::{Ipv4Addr, Ipv6Addr};

impl From<Ipv4Addr> for Ipv4 {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4::from(u32::from(addr))
    }
}

impl From<Ipv4> for Ipv4Addr {
    fn from(ip: Ipv4) -> Self {
        Ipv4Addr::from(u32::from(ip))
    }
}

impl From<Ipv6Addr> for Ipv6 {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6::from(u128::from(addr))
    }
}

impl From<Ipv6> for Ipv6Addr {
    fn from(ip: Ipv6) -> Self {
        Ipv6Addr::from(u128::from(ip))
    }
}

/* ---------------------------------- */

impl TryFrom<Ipv4Net> for Ipv4CidrRange {
    type Error = AddressError;

    fn try_from(net: Ipv4Net) -> Result<Self, Self::Error> {
        Ok(CidrRange::new(net.addr().into(), Prefix::new(net.prefix_len())?))
    }
}

impl TryFrom<Ipv4CidrRange> for Ipv4Net {
    type Error = AddressError;

    /// The resulting network holds the first address of the range.
    fn try_from(range: Ipv4CidrRange) -> Result<Self, Self::Error> {
        let length: u8 = range.prefix().length();
        Ipv4Net::new(range.first().into(), length).map_err(|_| AddressError::Prefix {
            length: length.to_string(),
            bits: Ipv4::BIT_SIZE,
        })
    }
}

impl TryFrom<Ipv6Net> for Ipv6CidrRange {
    type Error = AddressError;

    fn try_from(net: Ipv6Net) -> Result<Self, Self::Error> {
        Ok(CidrRange::new(net.addr().into(), Prefix::new(net.prefix_len())?))
    }
}

impl TryFrom<Ipv6CidrRange> for Ipv6Net {
    type Error = AddressError;

    /// The resulting network holds the first address of the range.
    fn try_from(range: Ipv6CidrRange) -> Result<Self, Self::Error> {
        let length: u8 = range.prefix().length();
        Ipv6Net::new(range.first().into(), length).map_err(|_| AddressError::Prefix {
            length: length.to_string(),
            bits: Ipv6::BIT_SIZE,
        })
    }
}

/* ---------------------------------- */

// Textual notation on the wire: "10.0.0.1", "2001:db8:0:0:0:0:0:1", "10.0.0.0/8".

impl Serialize for Ipv4 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Serialize for Ipv6 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<N: IpNumber> Serialize for CidrRange<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<N: IpNumber> Serialize for Prefix<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.length())
    }
}

fn parse_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr<Err = AddressError>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<T>().map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for Ipv6 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str(deserializer)
    }
}

impl<'de, N: IpNumber> Deserialize<'de> for CidrRange<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_str(deserializer)
    }
}

impl<'de, N: IpNumber> Deserialize<'de> for Prefix<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let length = u8::deserialize(deserializer)?;
        Prefix::new(length).map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */

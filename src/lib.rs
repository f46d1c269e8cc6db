// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4/IPv6 address values and CIDR range arithmetic.
//!
//! Addresses are immutable numbers ([Ipv4], [Ipv6]) with a fixed bit width,
//! decomposed into [Octet]s or [Hexadecatet]s for display. A [CidrRange]
//! combines an address with a [Prefix] and answers containment, overlap,
//! adjacency, splitting and enumeration queries.

pub mod bits;
mod groups;
mod interop;
mod ipv4;
mod ipv6;
mod number;
mod prefix;
mod range;
mod strings;
pub mod validator;

use num_bigint::BigUint;
use std::{error, fmt};
use strings::*;

pub use groups::{Hexadecatet, Octet};
pub use ipv4::Ipv4;
pub use ipv6::{collapse_ipv6, expand_ipv6, Ipv6};
pub use number::IpNumber;
pub use prefix::{Ipv4Prefix, Ipv6Prefix, Prefix};
pub use range::{Addresses, CidrRange, Ipv4CidrRange, Ipv6CidrRange};

pub const IPV4_BITS: u8 = 32;
pub const IPV6_BITS: u8 = 128;
pub(crate) const OCTET_BITS: u8 = 8;
pub(crate) const HEXADECATET_BITS: u8 = 16;

/// Category of an [AddressError]. All of them are caller input contract violations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// malformed dotted-decimal, colon-hex, binary or CIDR string
    StructuralParse,
    /// octet, hexadecatet, prefix length or address value out of bounds
    RangeBounds,
    /// stepping past the top or bottom of the address space
    AddressBoundary,
    /// `take(n)` with `n` negative or larger than the range
    EnumerationBounds,
    /// split of a single address range
    SplitIneligible,
}

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    DottedDecimalFmt(String),
    ColonHexFmt(String),
    /// more than one `::` in a colon-hex string
    DoubleColon(String),
    BinaryFmt   { input: String, bits: u8 },
    HexFmt(String),
    CidrFmt(String),
    Octet(String),
    Hexadecatet(String),
    Prefix      { length: String, bits: u8 },
    Ipv4Value(String),
    Ipv6Value(String),
    /// value wider than the requested binary string width
    Width       { value: u128, width: u8 },
    Netmask(String),
    NoNextAddress(String),
    NoPreviousAddress(String),
    NoNextRange(String),
    NoPreviousRange(String),
    TakeNegative(i128),
    TakeSize    { count: i128, size: BigUint },
    Split(String),
    /// several independent faults found in one input
    Multiple(Vec<AddressError>),
}

impl AddressError {
    /// Collapse a list of faults: a single fault is returned as is.
    pub(crate) fn aggregate(mut faults: Vec<AddressError>) -> Option<AddressError> {
        match faults.len() {
            0 => None,
            1 => faults.pop(),
            _ => Some(AddressError::Multiple(faults)),
        }
    }

    /// The individual faults this error consists of.
    pub fn faults(&self) -> &[AddressError] {
        match self {
            AddressError::Multiple(faults) => faults,
            other => std::slice::from_ref(other),
        }
    }

    /// The category of the error. For [AddressError::Multiple] this is the category of the first fault.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::DottedDecimalFmt(_)
            | AddressError::ColonHexFmt(_)
            | AddressError::DoubleColon(_)
            | AddressError::BinaryFmt { .. }
            | AddressError::HexFmt(_)
            | AddressError::CidrFmt(_) => ErrorKind::StructuralParse,
            AddressError::Octet(_)
            | AddressError::Hexadecatet(_)
            | AddressError::Prefix { .. }
            | AddressError::Ipv4Value(_)
            | AddressError::Ipv6Value(_)
            | AddressError::Width { .. }
            | AddressError::Netmask(_) => ErrorKind::RangeBounds,
            AddressError::NoNextAddress(_)
            | AddressError::NoPreviousAddress(_)
            | AddressError::NoNextRange(_)
            | AddressError::NoPreviousRange(_) => ErrorKind::AddressBoundary,
            AddressError::TakeNegative(_) | AddressError::TakeSize { .. } => {
                ErrorKind::EnumerationBounds
            }
            AddressError::Split(_) => ErrorKind::SplitIneligible,
            AddressError::Multiple(faults) => match faults.first() {
                Some(fault) => fault.kind(),
                None => ErrorKind::StructuralParse,
            },
        }
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::DottedDecimalFmt(s) => write!(f, "{ERR_DOTTED_FMT}: '{s}'"),
            AddressError::ColonHexFmt(s) => write!(f, "{ERR_COLON_HEX_FMT}: '{s}'"),
            AddressError::DoubleColon(s) => write!(f, "{ERR_DOUBLE_COLON}: '{s}'"),
            AddressError::BinaryFmt { input, bits } => {
                write!(f, "{ERR_BINARY_FMT} {bits}: '{input}'")
            }
            AddressError::HexFmt(s) => write!(f, "{ERR_HEX_FMT}: '{s}'"),
            AddressError::CidrFmt(s) => write!(f, "{ERR_CIDR_FMT}: '{s}'"),
            AddressError::Octet(val) => write!(f, "{ERR_OCTET} {val}"),
            AddressError::Hexadecatet(val) => write!(f, "{ERR_HEXADECATET} {val}"),
            AddressError::Prefix { length, bits } => {
                write!(f, "{ERR_PREFIX} {bits}, got {length}")
            }
            AddressError::Ipv4Value(val) => write!(f, "{ERR_IPV4_VALUE} {val}"),
            AddressError::Ipv6Value(val) => write!(f, "{ERR_IPV6_VALUE} {val}"),
            AddressError::Width { value, width } => {
                write!(f, "{ERR_WIDTH} {width} bits: {value}")
            }
            AddressError::Netmask(mask) => write!(f, "{ERR_NETMASK}: {mask}"),
            AddressError::NoNextAddress(ip) => write!(f, "{ERR_NO_NEXT}: {ip}"),
            AddressError::NoPreviousAddress(ip) => write!(f, "{ERR_NO_PREVIOUS}: {ip}"),
            AddressError::NoNextRange(cidr) => write!(f, "{ERR_NO_NEXT_RANGE}: {cidr}"),
            AddressError::NoPreviousRange(cidr) => write!(f, "{ERR_NO_PREVIOUS_RANGE}: {cidr}"),
            AddressError::TakeNegative(count) => write!(f, "{ERR_TAKE_NEGATIVE}: {count}"),
            AddressError::TakeSize { count, size } => {
                write!(f, "{count} {ERR_TAKE_SIZE} ({size})")
            }
            AddressError::Split(cidr) => write!(f, "{ERR_SPLIT}: {cidr}"),
            AddressError::Multiple(faults) => {
                for (i, fault) in faults.iter().enumerate() {
                    if i > 0 {
                        f.write_str(AND)?;
                    }
                    write!(f, "{fault}")?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for AddressError {}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_joins_messages() {
        let err = AddressError::Multiple(vec![
            AddressError::Octet("333".into()),
            AddressError::Prefix {
                length: "66".into(),
                bits: IPV4_BITS,
            },
        ]);
        assert_eq!(
            err.to_string(),
            format!("{ERR_OCTET} 333{AND}{ERR_PREFIX} 32, got 66")
        );
        assert_eq!(err.faults().len(), 2);
        assert_eq!(err.kind(), ErrorKind::RangeBounds);
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(AddressError::aggregate(vec![]), None);
        let single = AddressError::aggregate(vec![AddressError::Split("10.0.0.1/32".into())]);
        assert_eq!(single, Some(AddressError::Split("10.0.0.1/32".into())));
        assert_eq!(single.unwrap().faults().len(), 1);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            AddressError::ColonHexFmt("1:2".into()).kind(),
            ErrorKind::StructuralParse
        );
        assert_eq!(
            AddressError::NoNextRange("255.255.255.0/24".into()).kind(),
            ErrorKind::AddressBoundary
        );
        assert_eq!(
            AddressError::TakeNegative(-1).kind(),
            ErrorKind::EnumerationBounds
        );
        assert_eq!(
            AddressError::Split("::1/128".into()).kind(),
            ErrorKind::SplitIneligible
        );
    }
}

// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ipv4::Ipv4, ipv6::Ipv6, number::IpNumber, prefix::Prefix, strings::*, validator, AddressError,
};
use num_bigint::BigUint;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    str::FromStr,
};
use tracing::{debug, trace};

/**
CIDR block of addresses of family `N`: a base address plus a [Prefix].

The base address may carry host bits; the range always covers the block
the base address falls in, i.e. [CidrRange::first] is the base address with
the host bits cleared. Two ranges are equal if their first address and
prefix length are equal.
*/
#[derive(Clone, Copy, Debug)]
pub struct CidrRange<N: IpNumber> {
    base: N,
    prefix: Prefix<N>,
}

pub type Ipv4CidrRange = CidrRange<Ipv4>;
pub type Ipv6CidrRange = CidrRange<Ipv6>;

impl<N: IpNumber> CidrRange<N> {
    pub fn new(base: N, prefix: Prefix<N>) -> Self {
        Self { base, prefix }
    }

    /**
    Parse `<address>/<prefix length>` notation, f.ex. `10.0.0.0/8` or `2001:db8::/32`.

    The address and the prefix length are checked independently; when both
    are invalid the error is an [AddressError::Multiple] holding both faults.
    */
    pub fn from_cidr(cidr: &str) -> Result<Self, AddressError> {
        let parts: Vec<&str> = cidr.split(SLASH).collect();
        if parts.len() != 2 {
            debug!(input = cidr, "rejected CIDR notation");
            return Err(AddressError::CidrFmt(cidr.into()));
        }

        match (parts[0].parse::<N>(), parts[1].parse::<Prefix<N>>()) {
            (Ok(base), Ok(prefix)) => Ok(Self::new(base, prefix)),
            (base, prefix) => {
                let faults: Vec<AddressError> =
                    [base.err(), prefix.err()].into_iter().flatten().collect();
                let err: AddressError = AddressError::aggregate(faults)
                    .unwrap_or_else(|| AddressError::CidrFmt(cidr.into()));
                debug!(input = cidr, error = %err, "rejected CIDR notation");
                Err(err)
            }
        }
    }

    /// The address the range was created with, host bits included.
    pub fn base_address(&self) -> N {
        self.base
    }

    pub fn prefix(&self) -> Prefix<N> {
        self.prefix
    }

    fn first_value(&self) -> u128 {
        self.base.value() & self.prefix.netmask_value()
    }

    fn last_value(&self) -> u128 {
        self.first_value() | self.prefix.host_mask_value()
    }

    /// Network address of the block.
    pub fn first(&self) -> N {
        N::from_value_masked(self.first_value())
    }

    /// Highest address of the block.
    pub fn last(&self) -> N {
        N::from_value_masked(self.last_value())
    }

    /// Number of addresses in the range. Up to `2^128` for IPv6.
    pub fn size(&self) -> BigUint {
        self.prefix.size()
    }

    /// `other` lies entirely within this range. A range contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        self.first_value() <= other.first_value() && other.last_value() <= self.last_value()
    }

    /// This range lies entirely within `other`.
    pub fn inside(&self, other: &Self) -> bool {
        other.contains(self)
    }

    /**
    The ranges intersect only partially.

    Nested ranges (one containing the other) and identical ranges are
    **not** overlapping.
    */
    pub fn is_overlapping(&self, other: &Self) -> bool {
        let intersects: bool = self.first_value() <= other.last_value()
            && other.first_value() <= self.last_value();
        intersects && !self.contains(other) && !other.contains(self)
    }

    /// One range starts right after the other ends, in either order.
    pub fn is_consecutive(&self, other: &Self) -> bool {
        let follows = |a: &Self, b: &Self| -> bool {
            a.last().has_next() && a.last_value() + 1 == b.first_value()
        };
        follows(self, other) || follows(other, self)
    }

    pub fn has_next_range(&self) -> bool {
        self.last().has_next()
    }

    pub fn has_previous_range(&self) -> bool {
        self.first().has_previous()
    }

    /// The same-size block starting right after [Self::last].
    pub fn next_range(&self) -> Result<Self, AddressError> {
        if !self.has_next_range() {
            return Err(AddressError::NoNextRange(self.to_string()));
        }
        let base: N = N::from_value_masked(self.last_value() + 1);
        Ok(Self::new(base, self.prefix))
    }

    /// The same-size block ending right before [Self::first].
    pub fn previous_range(&self) -> Result<Self, AddressError> {
        if !self.has_previous_range() {
            return Err(AddressError::NoPreviousRange(self.to_string()));
        }
        let prev_first: u128 = (self.first_value() - 1) & self.prefix.netmask_value();
        Ok(Self::new(N::from_value_masked(prev_first), self.prefix))
    }

    /**
    Split the range into its two halves, each one bit longer in prefix.

    ### Errors
    - [AddressError::Split] if the range holds a single address.
    */
    pub fn split(&self) -> Result<[Self; 2], AddressError> {
        let length: u8 = self.prefix.length();
        validator::validate_split(self, length, N::BIT_SIZE)?;

        let half: Prefix<N> = Prefix::new(length + 1)?;
        let upper_bit: u128 = 1u128 << (N::BIT_SIZE - length - 1);
        let lower = Self::new(self.first(), half);
        let upper = Self::new(N::from_value_masked(self.first_value() | upper_bit), half);

        trace!(range = %self, lower = %lower, upper = %upper, "split range");
        Ok([lower, upper])
    }

    /**
    The first `count` addresses of the range in ascending order.

    ### Errors
    - [AddressError::TakeNegative] if `count < 0`.
    - [AddressError::TakeSize] if `count` exceeds [Self::size].
    */
    pub fn take(&self, count: i128) -> Result<Vec<N>, AddressError> {
        validator::validate_take(count, &self.size())?;
        trace!(range = %self, count, "taking addresses");

        let count: u128 = count as u128;
        let mut out: Vec<N> = Vec::with_capacity(count.min(1024) as usize);
        let mut taken: u128 = 0;
        for ip in self.iter() {
            if taken == count {
                break;
            }
            out.push(ip);
            taken += 1;
        }
        Ok(out)
    }

    /**
    Iterator over every address of the range, [Self::first] to [Self::last].

    NOTE: a short prefix, especially for IPv6, yields an astronomical number
    of addresses. The iterator is lazy, so only what is consumed is produced.
    */
    pub fn iter(&self) -> Addresses<N> {
        Addresses::new(self)
    }

    /// `<first>/<prefix length>`
    pub fn to_cidr_string(&self) -> String {
        self.to_string()
    }

    /// `<first>-<last>`
    pub fn to_range_string(&self) -> String {
        format!("{}{DASH}{}", self.first(), self.last())
    }

    fn cmp_key(&self) -> (u128, u8) {
        (self.first_value(), self.prefix.length())
    }
}

impl<N: IpNumber> PartialEq for CidrRange<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_key() == other.cmp_key()
    }
}

impl<N: IpNumber> Eq for CidrRange<N> {}

impl<N: IpNumber> Hash for CidrRange<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cmp_key().hash(state);
    }
}

/// By first address, then by prefix length (shorter, i.e. larger, range first).
impl<N: IpNumber> Ord for CidrRange<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_key().cmp(&other.cmp_key())
    }
}

impl<N: IpNumber> PartialOrd for CidrRange<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: IpNumber> FromStr for CidrRange<N> {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cidr(s)
    }
}

impl<N: IpNumber> fmt::Display for CidrRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.first(), self.prefix)
    }
}

impl<N: IpNumber> IntoIterator for CidrRange<N> {
    type Item = N;
    type IntoIter = Addresses<N>;

    fn into_iter(self) -> Self::IntoIter {
        Addresses::new(&self)
    }
}

impl<N: IpNumber> IntoIterator for &CidrRange<N> {
    type Item = N;
    type IntoIter = Addresses<N>;

    fn into_iter(self) -> Self::IntoIter {
        Addresses::new(self)
    }
}

/* ---------------------------------- */

/// Ascending iterator over the addresses of a [CidrRange].
#[derive(Clone, Debug)]
pub struct Addresses<N: IpNumber> {
    current: u128,
    /// inclusive
    end: u128,
    done: bool,
    family: PhantomData<N>,
}

impl<N: IpNumber> Addresses<N> {
    fn new(range: &CidrRange<N>) -> Self {
        Self {
            current: range.first_value(),
            end: range.last_value(),
            done: false,
            family: PhantomData,
        }
    }
}

impl<N: IpNumber> Iterator for Addresses<N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let ip: N = N::from_value_masked(self.current);
        if self.current == self.end {
            self.done = true;
        } else {
            self.current += 1;
        }

        Some(ip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // a whole v6 space does not fit in u128
        match (self.end - self.current).checked_add(1) {
            Some(rem) => match usize::try_from(rem) {
                Ok(rem) => (rem, Some(rem)),
                Err(_) => (usize::MAX, None),
            },
            None => (usize::MAX, None),
        }
    }
}

impl<N: IpNumber> FusedIterator for Addresses<N> {}

/* -------------------------------------------------------------------------- */

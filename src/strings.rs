// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static COLON: &str = ":";
pub(crate) static DOUBLE_COLON: &str = "::";
pub(crate) static DASH: &str = "-";
pub(crate) static SLASH: &str = "/";
pub(crate) static AND: &str = " and ";

// structural
pub(crate) static ERR_DOTTED_FMT: &str = "IPv4 address must be 4 dot-separated decimal octets";
pub(crate) static ERR_COLON_HEX_FMT: &str = "IPv6 address must be 8 colon-separated hexadecatets";
pub(crate) static ERR_DOUBLE_COLON: &str = "IPv6 address may contain '::' at most once";
pub(crate) static ERR_BINARY_FMT: &str = "binary string must be 1 or more '0'/'1' digits, at most";
pub(crate) static ERR_HEX_FMT: &str = "invalid hexadecimal string";
pub(crate) static ERR_CIDR_FMT: &str = "CIDR notation must be <address>/<prefix length>";

// bounds
pub(crate) static ERR_OCTET: &str = "octet value must be within 0..=255, got";
pub(crate) static ERR_HEXADECATET: &str = "hexadecatet value must be within 0..=ffff, got";
pub(crate) static ERR_PREFIX: &str = "prefix length must not exceed";
pub(crate) static ERR_IPV4_VALUE: &str = "IPv4 value must be within 0..=4294967295, got";
pub(crate) static ERR_IPV6_VALUE: &str =
    "IPv6 value must be within 0..=340282366920938463463374607431768211455, got";
pub(crate) static ERR_WIDTH: &str = "value does not fit in";
pub(crate) static ERR_NETMASK: &str = "netmask bits are not contiguous";

// address space boundary
pub(crate) static ERR_NO_NEXT: &str = "no next address after the top of the address space";
pub(crate) static ERR_NO_PREVIOUS: &str = "no previous address before the bottom of the address space";
pub(crate) static ERR_NO_NEXT_RANGE: &str = "no next range after the top of the address space";
pub(crate) static ERR_NO_PREVIOUS_RANGE: &str =
    "no previous range before the bottom of the address space";

// range operations
pub(crate) static ERR_TAKE_NEGATIVE: &str = "cannot take a negative number of addresses";
pub(crate) static ERR_TAKE_SIZE: &str = "is greater than the size of the range";
pub(crate) static ERR_SPLIT: &str = "cannot split a range holding a single address";

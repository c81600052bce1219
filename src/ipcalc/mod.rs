// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 subnet arithmetic on dotted-decimal strings.

mod addresses;
mod codec;
mod hosts;
mod masks;
mod strict;
mod strings;

use std::{error, fmt};
use strings::*;
use tracing::debug;

pub use addresses::*;
pub use codec::{binary_to_decimal, decimal_to_binary8, reverse_bits, BitOrder, Bits};
pub use hosts::*;
pub use masks::*;
pub use strict::{parse_dotted_quad, prefix_from_mask, subnet, summarize, SubnetSummary};

pub(crate) const IPV4_BITS: u32 = 32;
pub(crate) const OCTET_BITS: usize = 8;
pub(crate) const OCTETS: usize = 4;
pub(crate) const SEP: &str = ".";
pub(crate) const OCTET_FILLER: &str = "000"; // pad for octets a prefix never reached

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalcError {
    /// no `.` separator in the input
    Malformed(String),
    /// the other operand has fewer octets than the one being walked
    SegmentCount { expected: usize, found: usize },
    /// octet failed to parse in an operation without a partial result
    Unparseable(String),
    InvalidAddress(String),
    InvalidOctet(u32),
    InvalidPrefix(u8),
    NonContiguousMask(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Malformed(input) => {
                write!(f, "'{input}' {ERR_MALFORMED}")
            }
            CalcError::SegmentCount { expected, found } => {
                write!(f, "{ERR_SEG_COUNT}: expected at least {expected}, got {found}")
            }
            CalcError::Unparseable(seg) => {
                write!(f, "{ERR_UNPARSEABLE}: '{seg}'")
            }
            CalcError::InvalidAddress(addr) => {
                write!(f, "{ERR_INV_ADDR}: '{addr}'")
            }
            CalcError::InvalidOctet(val) => {
                write!(f, "{ERR_V4_OCTET} {val}")
            }
            CalcError::InvalidPrefix(pre) => {
                write!(f, "{ERR_INV_PREFIX} {pre}")
            }
            CalcError::NonContiguousMask(mask) => {
                write!(f, "{ERR_NON_CONTIGUOUS}: '{mask}'")
            }
        }
    }
}

impl error::Error for CalcError {}

/* ---------------------------------- */

/// Fail with [CalcError::Malformed] unless every input carries a separator.
pub(crate) fn require_separator(inputs: &[&str]) -> Result<(), CalcError> {
    if let Some(bad) = inputs.iter().find(|s| !s.contains(SEP)) {
        debug!(input = %bad, "{ERR_MALFORMED}");
        return Err(CalcError::Malformed(bad.to_string()));
    }
    Ok(())
}

/**
Split a dotted string into its segments.

Trailing empty segments are dropped (`"10.0."` has two segments), leading
and inner ones are kept and will fail to parse later.
*/
pub(crate) fn split_dotted(s: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = s.split(SEP).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Parse one segment leniently: spaces are removed, a sign is allowed and
/// nothing is bounds-checked.
pub(crate) fn parse_segment(seg: &str) -> Option<i32> {
    seg.replace(' ', "").parse::<i32>().ok()
}

/// Fail with [CalcError::SegmentCount] if `found` cannot cover `expected` octets.
pub(crate) fn require_segments(expected: usize, found: usize) -> Result<(), CalcError> {
    if found < expected {
        debug!(expected, found, "{ERR_SEG_COUNT}");
        return Err(CalcError::SegmentCount { expected, found });
    }
    Ok(())
}

/* -------------------------------------------------------------------------- */

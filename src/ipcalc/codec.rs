// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::OCTET_BITS;
use std::fmt;

/// Which end of a [Bits] vector holds the least significant bit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BitOrder {
    /// index 0 is 2^0 (native octet codec form)
    LsbFirst,
    /// index 0 is the highest bit (conventional notation)
    MsbFirst,
}

/**
Bit vector of an octet (or anything wider) with an explicit orientation.

The codec produces [BitOrder::LsbFirst] vectors, so the literal string is
the reverse of conventional binary notation: `69` is `10100010`. Callers
wanting the conventional form must [Bits::reversed] it.

Length is never validated. Values above 255 simply produce longer vectors.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bits {
    bits: Vec<bool>,
    order: BitOrder,
}

impl Bits {
    /// Least-significant-first form of `value`, right-padded with zeros to
    /// at least 8 bits. Non-positive values are all zeros.
    pub fn from_decimal(value: i32) -> Self {
        let mut bits: Vec<bool> = Vec::with_capacity(OCTET_BITS);
        let mut rest: i32 = value;
        while rest > 0 {
            bits.push(rest % 2 == 1);
            rest /= 2;
        }
        bits.resize(bits.len().max(OCTET_BITS), false);
        Self {
            bits,
            order: BitOrder::LsbFirst,
        }
    }

    /// Most-significant-first run of `count` ones, right-padded to `width`.
    pub fn ones(count: usize, width: usize) -> Self {
        let mut bits: Vec<bool> = vec![true; count];
        bits.resize(width.max(count), false);
        Self {
            bits,
            order: BitOrder::MsbFirst,
        }
    }

    pub fn order(&self) -> BitOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx).copied()
    }

    pub fn count_ones(&self) -> u32 {
        self.bits.iter().filter(|&&b| b).count() as u32
    }

    /// Same bits in the opposite order; the orientation flag flips with them.
    pub fn reversed(&self) -> Self {
        Self {
            bits: self.bits.iter().rev().copied().collect(),
            order: match self.order {
                BitOrder::LsbFirst => BitOrder::MsbFirst,
                BitOrder::MsbFirst => BitOrder::LsbFirst,
            },
        }
    }

    /// Reorient to [BitOrder::MsbFirst], reversing only if needed.
    pub fn to_msb_first(&self) -> Self {
        match self.order {
            BitOrder::MsbFirst => self.clone(),
            BitOrder::LsbFirst => self.reversed(),
        }
    }

    /// Every bit flipped, orientation kept.
    pub fn inverted(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
            order: self.order,
        }
    }

    /**
    Position-wise AND over the length of `self`. Positions missing from
    `mask` count as zero. Both operands are read in their stored order,
    so the caller must orient them alike.
    */
    pub fn and(&self, mask: &Bits) -> Self {
        debug_assert_eq!(self.order, mask.order, "Bits::and: orientation mismatch");
        Self {
            bits: self
                .bits
                .iter()
                .enumerate()
                .map(|(i, &b)| b && mask.get(i).unwrap_or(false))
                .collect(),
            order: self.order,
        }
    }

    /// Decode according to the orientation flag. Saturates past 63 bits.
    pub fn to_decimal(&self) -> i64 {
        let width: usize = self.bits.len();
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| match self.order {
                BitOrder::LsbFirst => i,
                BitOrder::MsbFirst => width - 1 - i,
            })
            .fold(0i64, |acc, pow| {
                acc.saturating_add(2i64.checked_pow(pow as u32).unwrap_or(i64::MAX))
            })
    }

    /// Parse a literal `0`/`1` string in the given order. Anything but `1`
    /// is a zero bit.
    pub fn from_str_with(s: &str, order: BitOrder) -> Self {
        Self {
            bits: s.chars().map(|c| c == '1').collect(),
            order,
        }
    }
}

/// The literal bit string in stored order.
impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/* ---------------------------------- */

/// Least-significant-first bit string of `value`, at least 8 characters.
pub fn decimal_to_binary8(value: i32) -> String {
    Bits::from_decimal(value).to_string()
}

/// Sum of powers of two for each `1`, reading `bits` least-significant-first.
pub fn binary_to_decimal(bits: &str) -> i64 {
    Bits::from_str_with(bits, BitOrder::LsbFirst).to_decimal()
}

/// Plain string reversal, converts between the codec form and display form.
pub fn reverse_bits(bits: &str) -> String {
    bits.chars().rev().collect()
}

/* -------------------------------------------------------------------------- */

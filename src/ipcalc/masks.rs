// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::Bits, parse_segment, require_separator, split_dotted, strings::*, CalcError,
    IPV4_BITS, OCTETS, OCTET_BITS, OCTET_FILLER, SEP,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of [calculate_net_mask_length].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MaskLength {
    /// number of one-bits across all octets
    Ones(u32),
    /// an octet failed to parse and counting was abandoned
    Unparseable { segment: String },
}

impl MaskLength {
    /// The bit count, or `-1` if counting was abandoned.
    pub fn value(&self) -> i32 {
        match self {
            MaskLength::Ones(n) => *n as i32,
            MaskLength::Unparseable { .. } => -1,
        }
    }
}

/**
Count the one-bits of a dotted-decimal subnet mask.

The mask is not checked for contiguity, so `255.0.255.0` yields 16. Octets
above 255 contribute all of their bits.

### Returns
- [MaskLength::Unparseable] (value `-1`) as soon as any octet fails to
  parse. No partial count is ever returned.

### Errors
- [CalcError::Malformed] if the mask has no `.` separator.
*/
pub fn calculate_net_mask_length(mask: &str) -> Result<MaskLength, CalcError> {
    require_separator(&[mask])?;

    let mut ones: u32 = 0;
    for seg in split_dotted(mask) {
        match parse_segment(seg) {
            Some(val) => ones += Bits::from_decimal(val).count_ones(),
            None => {
                debug!(mask, segment = seg, "{LOG_SENTINEL}");
                return Ok(MaskLength::Unparseable {
                    segment: seg.to_string(),
                });
            }
        }
    }
    Ok(MaskLength::Ones(ones))
}

/**
Build a subnet mask from a prefix length, f.ex. `24` gives `255.255.255.000`.

Octets the prefix never reaches are filled with the literal `000`, so the
output always spans at least 4 octets. Nothing is bounds-checked: negative
lengths act like zero and lengths past 32 spill into a fifth octet, which
saturates at `255` from 40 on.
*/
pub fn mask_from_prefix_length(prefix_length: i32) -> String {
    // at most one spill octet
    let ones: usize = (prefix_length.max(0) as usize).min(IPV4_BITS as usize + OCTET_BITS);
    let mut octets: Vec<String> = Vec::with_capacity(OCTETS);

    for _ in 0..ones / OCTET_BITS {
        octets.push(Bits::ones(OCTET_BITS, OCTET_BITS).to_decimal().to_string());
    }
    // trailing partial group is padded on the right, i.e. read as the high bits
    let rest: usize = ones % OCTET_BITS;
    if rest > 0 {
        octets.push(Bits::ones(rest, OCTET_BITS).to_decimal().to_string());
    }
    while octets.len() < OCTETS {
        octets.push(OCTET_FILLER.to_string());
    }

    octets.join(SEP)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const MASK_24: &str = "255.255.255.0";
    const MASK_32: &str = "255.255.255.255";
    const MASK_0: &str = "0.0.0.0";
    const MASK_HOLEY: &str = "255.0.255.0";
    const MASK_BAD: &str = "255.255.x.0";
    const MASK_NOSEP: &str = "255255255000";

    fn len(mask: &str) -> i32 {
        calculate_net_mask_length(mask).unwrap().value()
    }

    #[test]
    fn test_mask_length() {
        assert_eq!(len(MASK_24), 24);
        assert_eq!(len(MASK_32), 32);
        assert_eq!(len(MASK_0), 0);
        assert_eq!(len(" 255 . 255 .240. 0"), 20);
    }

    #[test]
    fn test_mask_length_counts_bits_not_prefix() {
        assert_eq!(len(MASK_HOLEY), 16);
        assert_eq!(len("0.0.0.1"), 1);
    }

    #[test]
    fn test_mask_length_unparseable_is_sentinel() {
        let res = calculate_net_mask_length(MASK_BAD).unwrap();
        assert_eq!(res, MaskLength::Unparseable { segment: "x".into() });
        assert_eq!(res.value(), -1);
    }

    #[test]
    fn test_mask_length_malformed() {
        assert_eq!(
            calculate_net_mask_length(MASK_NOSEP),
            Err(CalcError::Malformed(MASK_NOSEP.into()))
        );
    }

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(mask_from_prefix_length(24), "255.255.255.000");
        assert_eq!(mask_from_prefix_length(32), "255.255.255.255");
        assert_eq!(mask_from_prefix_length(20), "255.255.240.000");
        assert_eq!(mask_from_prefix_length(8), "255.000.000.000");
        assert_eq!(mask_from_prefix_length(1), "128.000.000.000");
        assert_eq!(mask_from_prefix_length(0), "000.000.000.000");
    }

    #[test]
    fn test_mask_from_prefix_out_of_range() {
        assert_eq!(mask_from_prefix_length(-5), "000.000.000.000");
        assert_eq!(mask_from_prefix_length(33), "255.255.255.255.128");
    }

    #[test]
    fn test_mask_from_huge_prefix_is_bounded() {
        assert_eq!(mask_from_prefix_length(40), "255.255.255.255.255");
        assert_eq!(mask_from_prefix_length(1 << 26), "255.255.255.255.255");
        assert_eq!(mask_from_prefix_length(i32::MAX), "255.255.255.255.255");
    }

    #[test]
    fn test_mask_length_counts_ones() {
        assert_eq!(calculate_net_mask_length(MASK_24), Ok(MaskLength::Ones(24)));
    }

    #[test]
    fn test_prefix_round_trip() {
        for p in 0..=32 {
            let mask: String = mask_from_prefix_length(p);
            assert_eq!(len(&mask), p, "Failed: /{p} -> '{mask}'");
        }
    }
}

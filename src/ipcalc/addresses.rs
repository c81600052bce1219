// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::Bits, mask_from_prefix_length, parse_segment, require_segments, require_separator,
    split_dotted, strings::*, CalcError, SEP,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/**
Outcome of the address calculations.

An unparseable octet is not an error for these operations: they hand back
what was computed up to that point instead, tagged as [DottedResult::Partial].
*/
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DottedResult {
    Complete(String),
    Partial {
        /// octets computed before the failure, no trailing separator
        address: String,
        /// the segment that failed to parse
        segment: String,
    },
}

impl DottedResult {
    /// The address text, complete or not.
    pub fn as_str(&self) -> &str {
        match self {
            DottedResult::Complete(address) => address,
            DottedResult::Partial { address, .. } => address,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, DottedResult::Partial { .. })
    }

    pub fn failed_segment(&self) -> Option<&str> {
        match self {
            DottedResult::Complete(_) => None,
            DottedResult::Partial { segment, .. } => Some(segment),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            DottedResult::Complete(address) => address,
            DottedResult::Partial { address, .. } => address,
        }
    }

    fn partial(done: &[String], segment: &str) -> Self {
        let address: String = done.join(SEP);
        debug!(address = %address, segment, "{LOG_PARTIAL}");
        DottedResult::Partial {
            address,
            segment: segment.to_string(),
        }
    }
}

impl fmt::Display for DottedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------------------------- */

/**
Network address of `address` under a dotted-decimal `mask`.

Each octet pair is encoded, turned most-significant-first and ANDed bit by
bit. Octet values are not bounds-checked: `404.404.404.002` under
`255.255.255.0` gives `404.404.404.0`.

### Returns
- [DottedResult::Partial] with the octets done so far if any octet fails
  to parse.

### Errors
- [CalcError::Malformed] if either input has no `.` separator.
- [CalcError::SegmentCount] if the mask has fewer octets than the address.
*/
pub fn network_address(address: &str, mask: &str) -> Result<DottedResult, CalcError> {
    require_separator(&[address, mask])?;

    let addr_segs: Vec<&str> = split_dotted(address);
    let mask_segs: Vec<&str> = split_dotted(mask);
    require_segments(addr_segs.len(), mask_segs.len())?;

    let mut done: Vec<String> = Vec::with_capacity(addr_segs.len());
    for (addr_seg, mask_seg) in addr_segs.iter().zip(mask_segs.iter()) {
        let Some(mask_val) = parse_segment(mask_seg) else {
            return Ok(DottedResult::partial(&done, mask_seg));
        };
        let Some(addr_val) = parse_segment(addr_seg) else {
            return Ok(DottedResult::partial(&done, addr_seg));
        };

        let mask_bits: Bits = Bits::from_decimal(mask_val).to_msb_first();
        let addr_bits: Bits = Bits::from_decimal(addr_val).to_msb_first();
        done.push(addr_bits.and(&mask_bits).to_decimal().to_string());
    }

    Ok(DottedResult::Complete(done.join(SEP)))
}

/// Network address of `address` under the mask built from `prefix_length`.
/// Same contract as [network_address].
pub fn network_address_for_prefix(
    address: &str,
    prefix_length: i32,
) -> Result<DottedResult, CalcError> {
    let mask: String = mask_from_prefix_length(prefix_length);
    network_address(address, &mask)
}

/**
Broadcast address of `address` under a dotted-decimal `mask`.

Only the mask octets are parsed. For each one the host bits are its
inverse; when there are none (mask octet 255) the address segment is
copied as-is, otherwise the host bits themselves become the octet. The
address octet does not take part in that case.

### Returns
- [DottedResult::Partial] with the octets done so far if a mask octet
  fails to parse.

### Errors
- [CalcError::Malformed] if either input has no `.` separator.
- [CalcError::SegmentCount] if the address has fewer octets than the mask.
*/
pub fn broadcast_address(address: &str, mask: &str) -> Result<DottedResult, CalcError> {
    require_separator(&[mask, address])?;

    let addr_segs: Vec<&str> = split_dotted(address);
    let mask_segs: Vec<&str> = split_dotted(mask);
    require_segments(mask_segs.len(), addr_segs.len())?;

    let mut done: Vec<String> = Vec::with_capacity(mask_segs.len());
    for (mask_seg, addr_seg) in mask_segs.iter().zip(addr_segs.iter()) {
        let Some(mask_val) = parse_segment(mask_seg) else {
            return Ok(DottedResult::partial(&done, mask_seg));
        };

        let host_bits: Bits = Bits::from_decimal(mask_val).inverted();
        if host_bits.count_ones() == 0 {
            done.push(addr_seg.to_string());
        } else {
            done.push(host_bits.to_msb_first().to_decimal().to_string());
        }
    }

    Ok(DottedResult::Complete(done.join(SEP)))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "192.168.0.2";
    const ADDR_BIG: &str = "404.404.404.002";
    const MASK_24: &str = "255.255.255.0";
    const MASK_16: &str = "255.255.0.0";
    const MASK_20: &str = "255.255.240.0";

    fn net(addr: &str, mask: &str) -> DottedResult {
        network_address(addr, mask).unwrap()
    }

    fn bcast(addr: &str, mask: &str) -> DottedResult {
        broadcast_address(addr, mask).unwrap()
    }

    #[test]
    fn test_network_address() {
        assert_eq!(net(ADDR, MASK_24).as_str(), "192.168.0.0");
        assert_eq!(net("10.1.37.200", MASK_20).as_str(), "10.1.32.0");
        assert_eq!(net("172.16.5.4", "0.0.0.0").as_str(), "0.0.0.0");
    }

    #[test]
    fn test_network_address_unbounded_octets() {
        assert_eq!(net(ADDR_BIG, MASK_24), DottedResult::Complete("404.404.404.0".into()));
        let by_prefix = network_address_for_prefix(ADDR_BIG, 24).unwrap();
        assert_eq!(by_prefix.as_str(), "404.404.404.0");
    }

    #[test]
    fn test_network_address_for_prefix() {
        let res = network_address_for_prefix("10.1.37.200", 20).unwrap();
        assert_eq!(res.to_string(), "10.1.32.0");
        assert_eq!(network_address_for_prefix(ADDR, 0).unwrap().as_str(), "0.0.0.0");
        assert_eq!(network_address_for_prefix(ADDR, 32).unwrap().as_str(), ADDR);
    }

    #[test]
    fn test_network_address_for_huge_prefix() {
        let res = network_address_for_prefix(ADDR, i32::MAX).unwrap();
        assert_eq!(res, DottedResult::Complete(ADDR.into()));
        assert_eq!(network_address_for_prefix("1.2.3.4", 1 << 26).unwrap().as_str(), "1.2.3.4");
    }

    #[test]
    fn test_network_address_partial() {
        let res = net("192.168.x.1", MASK_24);
        assert!(res.is_partial());
        assert_eq!(res.as_str(), "192.168");
        assert_eq!(res.failed_segment(), Some("x"));

        let res = net(ADDR, "255.y.255.0");
        assert_eq!(res.as_str(), "192");
        assert_eq!(res.failed_segment(), Some("y"));

        let res = net("abc.168.0.2", MASK_24);
        assert_eq!(res.as_str(), "");
    }

    #[test]
    fn test_network_address_errors() {
        assert_eq!(
            network_address("192168002", MASK_24),
            Err(CalcError::Malformed("192168002".into()))
        );
        assert_eq!(
            network_address(ADDR, "24"),
            Err(CalcError::Malformed("24".into()))
        );
        assert_eq!(
            network_address_for_prefix("10", 8),
            Err(CalcError::Malformed("10".into()))
        );
        assert_eq!(
            network_address("10.0.0.0.1", MASK_24),
            Err(CalcError::SegmentCount { expected: 5, found: 4 })
        );
    }

    #[test]
    fn test_broadcast_address() {
        assert_eq!(bcast(ADDR, MASK_24).as_str(), "192.168.0.255");
        assert_eq!(bcast(ADDR, MASK_16).as_str(), "192.168.255.255");
        assert_eq!(bcast(ADDR, "0.0.0.0").as_str(), "255.255.255.255");
    }

    #[test]
    fn test_broadcast_uses_host_bits_only() {
        // the third octet is the host part of the mask, not address | host
        assert_eq!(bcast("10.1.37.200", MASK_20).as_str(), "10.1.15.255");
    }

    #[test]
    fn test_broadcast_copies_address_verbatim() {
        assert_eq!(bcast("010. 1 .0.9", MASK_24).as_str(), "010. 1 .0.255");
    }

    #[test]
    fn test_broadcast_partial() {
        let res = bcast(ADDR, "255.255.z.0");
        assert_eq!(
            res,
            DottedResult::Partial {
                address: "192.168".into(),
                segment: "z".into()
            }
        );
    }

    #[test]
    fn test_broadcast_errors() {
        assert!(matches!(broadcast_address(ADDR, "ffffff00"), Err(CalcError::Malformed(_))));
        assert!(matches!(broadcast_address("localhost", MASK_24), Err(CalcError::Malformed(_))));
        assert_eq!(
            broadcast_address("10.0.0", MASK_24),
            Err(CalcError::SegmentCount { expected: 4, found: 3 })
        );
    }
}

// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::Bits, parse_segment, require_segments, require_separator, split_dotted, CalcError,
    IPV4_BITS,
};

/**
Maximum number of hosts in a subnet: `2^(32 - mask_length) - 2`.

Network and broadcast addresses are reserved. There is no floor at zero,
so `/31` gives 0 and `/32` gives -1, as does anything longer. Very short
(negative) lengths saturate at [i64::MAX].
*/
pub fn max_hosts_for_mask_length(mask_length: i32) -> i64 {
    let host_bits: i64 = IPV4_BITS as i64 - mask_length as i64;
    if host_bits < 0 {
        // 2^-n - 2 lies in (-2, -1], which truncates to -1
        return -1;
    }
    u32::try_from(host_bits)
        .ok()
        .and_then(|bits| 2i64.checked_pow(bits))
        .map_or(i64::MAX, |size| size - 2)
}

/**
Shortest mask length whose subnet spans `host_count` addresses, i.e.
`32 - ceil(log2(host_count))`.

Unlike [max_hosts_for_mask_length], nothing is reserved for the network
and broadcast addresses: 256 hosts fit a /24. A count of 0 or 1 needs no
host bits at all and gives 32.
*/
pub fn required_mask_length_for_hosts(host_count: u32) -> i32 {
    if host_count <= 1 {
        return IPV4_BITS as i32;
    }
    let floor_log2: u32 = host_count.ilog2();
    // one more bit of headroom unless log2 came out whole
    let host_bits: u32 = floor_log2 + u32::from(!host_count.is_power_of_two());
    (IPV4_BITS - host_bits) as i32
}

/**
Number of leading bits two dotted-decimal addresses have in common, i.e.
the longest netmask that still covers both.

Bits are compared in the octet codec's native least-significant-first order,
octet after octet, stopping at the first mismatch. When the encodings of an
octet pair differ in length (values above 255) a missing bit is a mismatch.

### Errors
- [CalcError::Malformed] if either address has no `.` separator.
- [CalcError::SegmentCount] if the octet counts differ.
- [CalcError::Unparseable] if any octet fails to parse.
*/
pub fn common_prefix_length(address_a: &str, address_b: &str) -> Result<u32, CalcError> {
    require_separator(&[address_a, address_b])?;

    let segs_a: Vec<&str> = split_dotted(address_a);
    let segs_b: Vec<&str> = split_dotted(address_b);
    require_segments(segs_a.len().max(segs_b.len()), segs_a.len().min(segs_b.len()))?;

    let mut matched: u32 = 0;
    for (seg_a, seg_b) in segs_a.iter().zip(segs_b.iter()) {
        let bits_a: Bits = encode(seg_a)?;
        let bits_b: Bits = encode(seg_b)?;

        for i in 0..bits_a.len().max(bits_b.len()) {
            match (bits_a.get(i), bits_b.get(i)) {
                (Some(a), Some(b)) if a == b => matched += 1,
                _ => return Ok(matched),
            }
        }
    }
    Ok(matched)
}

#[inline]
fn encode(seg: &str) -> Result<Bits, CalcError> {
    parse_segment(seg)
        .map(Bits::from_decimal)
        .ok_or_else(|| CalcError::Unparseable(seg.to_string()))
}

/* -------------------------------------------------------------------------- */

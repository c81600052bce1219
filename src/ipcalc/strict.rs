// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated counterparts of the lenient string calculations. These reject
//! what the lenient ones accept: out-of-range octets, wrong octet counts,
//! non-contiguous masks and prefixes past 32.

use super::{strings::*, CalcError, IPV4_BITS};
use ipnet::Ipv4Net;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use tracing::debug;

lazy_static! {
    // 1-3 digits per octet so zero-padded masks ("255.255.255.000") still parse
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^\s*(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})\s*$")
            .expect("dotted quad regex must compile");
}

/// Everything about the subnet an address lives in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubnetSummary {
    pub address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub prefix: u8,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// usable hosts, 0 for /31 and /32
    pub hosts: u64,
}

/**
Parse a dotted-decimal IPv4 address or mask, strictly.

Unlike [std::net::Ipv4Addr]'s parser, zero-padded octets are accepted.

### Errors
- [CalcError::InvalidAddress] if the input is not exactly 4 numeric octets.
- [CalcError::InvalidOctet] if an octet is above 255.
*/
pub fn parse_dotted_quad(s: &str) -> Result<Ipv4Addr, CalcError> {
    let Some(caps) = DOTTED_QUAD.captures(s) else {
        debug!(input = s, "{ERR_INV_ADDR}");
        return Err(CalcError::InvalidAddress(s.to_string()));
    };

    let mut octets: [u8; 4] = [0; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // at most 3 digits, cannot overflow a u32
        let val: u32 = caps[i + 1]
            .parse()
            .map_err(|_| CalcError::InvalidAddress(s.to_string()))?;
        *octet = u8::try_from(val).map_err(|_| CalcError::InvalidOctet(val))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Prefix length of a contiguous dotted-decimal mask.
pub fn prefix_from_mask(mask: &str) -> Result<u8, CalcError> {
    let parsed: Ipv4Addr = parse_dotted_quad(mask)?;
    ipnet::ipv4_mask_to_prefix(parsed).map_err(|_| {
        debug!(mask, "{ERR_NON_CONTIGUOUS}");
        CalcError::NonContiguousMask(mask.to_string())
    })
}

/// The [Ipv4Net] of `address` with prefix length `prefix` (host bits kept).
pub fn subnet(address: &str, prefix: u8) -> Result<Ipv4Net, CalcError> {
    let addr: Ipv4Addr = parse_dotted_quad(address)?;
    Ipv4Net::new(addr, prefix).map_err(|_| CalcError::InvalidPrefix(prefix))
}

/**
Summarize the subnet of `address` under `mask`.

The broadcast address here is the conventional one (network OR host bits),
and the usable host count never goes negative.
*/
pub fn summarize(address: &str, mask: &str) -> Result<SubnetSummary, CalcError> {
    let prefix: u8 = prefix_from_mask(mask)?;
    let net: Ipv4Net = subnet(address, prefix)?;
    let size: u64 = 1u64 << (IPV4_BITS - prefix as u32);

    Ok(SubnetSummary {
        address: net.addr(),
        netmask: net.netmask(),
        prefix,
        network: net.network(),
        broadcast: net.broadcast(),
        hosts: size.saturating_sub(2),
    })
}

/* -------------------------------------------------------------------------- */

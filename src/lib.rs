// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4 subnet arithmetic on dotted-decimal strings.

The lenient calculations accept whatever they are given: octets above 255,
odd octet counts, masks with holes. Their results follow the bits rather
than networking rules, and unparseable octets yield sentinel or partial
results instead of errors. A missing `.` separator, or an operand with
too few octets to walk, is an error everywhere.

```ignore
use subnetcalc::*;

assert_eq!(calculate_net_mask_length("255.255.255.0")?.value(), 24);
assert_eq!(mask_from_prefix_length(24), "255.255.255.000");
assert_eq!(network_address_for_prefix("192.168.0.2", 24)?.as_str(), "192.168.0.0");
assert_eq!(broadcast_address("192.168.0.2", "255.255.255.0")?.as_str(), "192.168.0.255");
assert_eq!(max_hosts_for_mask_length(21), 2046);
assert_eq!(required_mask_length_for_hosts(100), 25);
assert_eq!(common_prefix_length("128.42.5.17", "128.42.5.67")?, 25);
```

For validated input use [parse_dotted_quad], [prefix_from_mask], [subnet]
and [summarize] instead.
*/

mod ipcalc;

pub use ipcalc::*;

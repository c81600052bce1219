// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

// mod.rs
pub(crate) static ERR_MALFORMED: &str = "cannot be separated, use periods to split it into 4 sections";
pub(crate) static ERR_SEG_COUNT: &str = "octet count mismatch";
pub(crate) static ERR_UNPARSEABLE: &str = "unparseable octet";

// strict.rs
pub(crate) static ERR_INV_ADDR: &str = "invalid IPv4 address";
pub(crate) static ERR_V4_OCTET: &str = "IPv4 octet must be <= 255, got";
pub(crate) static ERR_INV_PREFIX: &str = "IPv4 prefix must be <= 32, got";
pub(crate) static ERR_NON_CONTIGUOUS: &str = "subnet mask is not contiguous";

// logging
pub(crate) static LOG_SENTINEL: &str = "mask length aborted on unparseable octet";
pub(crate) static LOG_PARTIAL: &str = "returning partial address";

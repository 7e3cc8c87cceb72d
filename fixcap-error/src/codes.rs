// FIXCAP - fixcap-error
// Module: Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for fixed-capacity containers

// Capacity error codes (1000-1099)
/// A single element did not fit
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// A requested length is larger than the compile-time capacity
pub const LENGTH_EXCEEDS_CAPACITY: u16 = 1001;
/// A source sequence is longer than the destination capacity
pub const SOURCE_TOO_LONG: u16 = 1002;

// Bounds error codes (1100-1199)
/// Index is not below the logical length
pub const INDEX_OUT_OF_BOUNDS: u16 = 1100;
/// Operation requires a non-empty container
pub const EMPTY_CONTAINER: u16 = 1101;

// Conversion error codes (1200-1299)
/// Content is not valid UTF-8
pub const INVALID_UTF8: u16 = 1200;
/// Formatting into a bounded buffer failed
pub const FORMAT_ERROR: u16 = 1201;

// Parameter error codes (1300-1399)
/// A comparison tolerance is negative or NaN
pub const INVALID_TOLERANCE: u16 = 1300;

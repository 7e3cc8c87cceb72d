// FIXCAP - fixcap-math
// Module: fixcap-math
// SW-REQ-ID: REQ_MATH_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Numeric comparison helpers for FIXCAP.
//! Provides exact, fuzzy and sign comparisons for primitive numbers that work
//! the same in `std` and `no_std` builds.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_arithmetic)]

// Import std when available
#[cfg(feature = "std")]
extern crate std;

// Modules
pub mod comparison;
pub mod prelude;
pub mod traits;

// Re-export key types and functions for easier access
pub use comparison::{
    close, close_to_zero, close_with, close_within, equal, negative, positive, Close, Tolerance,
    DEFAULT_EPSILON_MULTIPLIER,
};
pub use traits::{Float, Numeric};

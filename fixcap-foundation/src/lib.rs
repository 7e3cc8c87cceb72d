// FIXCAP - fixcap-foundation
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity containers and integer formatting for allocation-free code.
//!
//! This crate provides the value types of the FIXCAP project:
//!
//! - [`StaticString`]: a NUL-terminated text buffer of at most `N` bytes
//! - [`StaticVec`]: a vector of at most `N` `Copy` elements
//! - [`int_to_string`]: integer formatting into an exactly sized
//!   `StaticString`
//!
//! All storage is inline. Overflowing input on construction, assignment and
//! append is truncated silently. Violating a documented precondition (an
//! index past the length, popping an empty vector, resizing past capacity)
//! is a contract violation; see below.
//!
//! # Feature Flags
//!
//! - `std`: Links the standard library (implements nothing extra today)
//! - `tracing`: Emits structured events for truncation and for contract
//!   violations that were ignored
//! - `runtime-bounds-checking`: Keeps contract checks in release builds
//!
//! # Contract checks
//!
//! Contract checks are active when `debug_assertions` are enabled or the
//! `runtime-bounds-checking` feature is on, and panic on violation. Otherwise
//! a violating `push_back`, `pop_back` or `resize` degrades to a no-op or a
//! clamp. Indexing, `front` and `back` are always checked.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(clippy::pedantic)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;
#[macro_use]
mod trace;

/// Inline-storage collections
pub mod collections;
/// Integer to text conversion
pub mod int_to_string;
/// Commonly used imports
pub mod prelude;

pub use collections::{StaticString, StaticVec, TextSource};
pub use fixcap_error::{codes, Error, ErrorCategory, Result};
pub use int_to_string::{int_to_string, int_to_string_radix, FormatRadix};

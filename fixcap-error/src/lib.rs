// FIXCAP - fixcap-error
// Module: Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the fixed-capacity containers.
//!
//! The containers follow a two-tier policy: overflowing input is silently
//! truncated and precondition violations are contract checks, not errors.
//! The [`Error`] type only backs the few *checked* companion operations
//! (`try_push`, `try_resize`, `try_at`, strict conversions) that let callers
//! observe a rejected operation instead of a silent one.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1099)
//! - Capacity exceeded by a single push
//! - Requested length beyond capacity
//! - Source longer than the destination
//!
//! ## Bounds Errors (1100-1199)
//! - Index past the logical length
//! - Access on an empty container
//!
//! ## Conversion Errors (1200-1299)
//! - Invalid UTF-8 content
//!
//! ## Parameter Errors (1300-1399)
//! - Negative or NaN comparison tolerance
//!
//! # Usage
//!
//! ```
//! use fixcap_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::capacity_exceeded("StaticVec is full");
//! assert_eq!(error.category, ErrorCategory::Capacity);
//! assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes
pub mod codes;
/// Error and error category types
pub mod errors;

pub mod prelude;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for checked container operations.
pub type Result<T> = core::result::Result<T, Error>;

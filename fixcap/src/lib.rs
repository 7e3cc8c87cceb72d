//! Fixed-capacity containers for allocation-free Rust (FIXCAP)
//!
//! FIXCAP gathers value types whose storage size is fixed at compile time, for
//! firmware and control loops where heap allocation is unwanted or forbidden.
//!
//! ## Features
//!
//! - [`StaticString`]: NUL-terminated text of at most `N` bytes
//! - [`StaticVec`]: up to `N` `Copy` elements with a running length
//! - [`int_to_string`]: integer formatting into an exactly sized string
//! - [`comparison`]: exact, fuzzy and sign comparison of numbers
//! - no_std compatibility; nothing allocates
//!
//! Overflowing input is truncated silently. Precondition violations such as
//! indexing past the length are contract checks that panic in checked
//! builds. The `try_*` companions return [`Error`] instead.
//!
//! ```
//! use fixcap::prelude::*;
//!
//! let mut line = StaticString::<16>::from("t=");
//! line += &int_to_string(-40_i32);
//! assert_eq!(line, "t=-40");
//!
//! let readings: StaticVec<f32, 4> = static_vec![0.1, 0.2];
//! assert!(close(readings[0], 0.1_f64));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

// Include prelude module for consistent imports across crates
pub mod prelude;

pub use fixcap_error::{codes, Error, ErrorCategory, Result};
pub use fixcap_foundation::{
    collections, int_to_string, int_to_string_radix, static_vec, FormatRadix, StaticString,
    StaticVec, TextSource,
};
pub use fixcap_math::{comparison, traits::Numeric, Close, Tolerance};


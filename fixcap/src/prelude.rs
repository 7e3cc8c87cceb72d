//! Prelude module for fixcap
//!
//! Re-exports the container types, integer formatting, comparison functions
//! and error types so that `use fixcap::prelude::*;` covers typical use.

pub use fixcap_error::{codes, Error, ErrorCategory, Result};
pub use fixcap_foundation::{
    int_to_string, int_to_string_radix, static_vec, StaticString, StaticVec, TextSource,
};
pub use fixcap_math::{
    close, close_to_zero, close_with, close_within, equal, negative, positive, Close, Tolerance,
};

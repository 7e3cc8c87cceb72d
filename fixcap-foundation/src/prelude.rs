// FIXCAP - fixcap-foundation
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for fixcap-foundation
//!
//! Re-exports the container types, the integer formatter and the error types
//! so that `use fixcap_foundation::prelude::*;` covers typical use.

pub use fixcap_error::{codes, Error, ErrorCategory, Result};

pub use crate::{
    collections::{StaticString, StaticVec, TextSource},
    int_to_string::{int_to_string, int_to_string_radix, FormatRadix},
    static_vec,
};

// FIXCAP - fixcap-foundation
// Module: Static collections
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Inline-storage collections with compile-time capacity.
//!
//! Neither collection owns heap memory or a memory provider: storage lives
//! inside the value, so a collection is as cheap to copy as its capacity.

mod static_string;
mod static_vec;

pub use static_string::{StaticString, TextSource};
pub use static_vec::StaticVec;

// FIXCAP - fixcap-error
// Module: Prelude
// SW-REQ-ID: N/A
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `fixcap-error`

pub use core::{
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{codes, Error, ErrorCategory, Result};

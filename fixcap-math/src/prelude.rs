// FIXCAP - fixcap-math
// Module: Prelude
// SW-REQ-ID: N/A
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `fixcap-math`

pub use fixcap_error::{Error, Result};

pub use crate::{
    comparison::{
        close, close_to_zero, close_with, close_within, equal, negative, positive, Close,
        Tolerance,
    },
    traits::{Float, Numeric},
};

// FIXCAP - fixcap-foundation
// Module: Contract and Construction Macros
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Contract checking and container construction macros.

/// Checks a documented precondition.
///
/// The check is active when `debug_assertions` are on or the
/// `runtime-bounds-checking` feature is enabled. With both off it compiles to
/// nothing and the caller falls back to its silent behavior.
macro_rules! contract {
    ($cond:expr, $($msg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "runtime-bounds-checking")) {
            assert!($cond, $($msg)+);
        }
    };
}

/// Creates a [`StaticVec`](crate::StaticVec) from a list of elements.
///
/// Elements past the capacity are dropped, exactly like
/// `StaticVec::from([..])`.
///
/// # Examples
///
/// ```
/// use fixcap_foundation::{static_vec, StaticVec};
///
/// let vec: StaticVec<i8, 7> = static_vec![1, 2, 3, 4];
/// assert_eq!(vec.len(), 4);
/// assert_eq!(vec, [1, 2, 3, 4]);
///
/// let filled: StaticVec<u32, 6> = static_vec![123; 5];
/// assert_eq!(filled.len(), 5);
/// ```
#[macro_export]
macro_rules! static_vec {
    () => {
        $crate::StaticVec::new()
    };
    ($value:expr; $count:expr) => {
        $crate::StaticVec::from_elem($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::StaticVec::from([$($value),+])
    };
}

// FIXCAP - fixcap-foundation
// Module: Tracing Hooks
// SW-REQ-ID: REQ_TEMPORAL_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing hooks for the silent container policies.
//!
//! Truncation and ignored contract violations are silent at the API level.
//! With the `tracing` feature enabled they become observable as structured
//! events; without it every hook expands to nothing.

/// Emits a `trace` event for input dropped at capacity.
///
/// The two-argument form is for iterator sources, whose remaining length may
/// be unbounded.
macro_rules! trace_truncation {
    ($container:literal, $capacity:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            container = $container,
            capacity = $capacity,
            "input truncated at capacity"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = $capacity;
    }};
    ($container:literal, $capacity:expr, $dropped:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            container = $container,
            capacity = $capacity,
            dropped = $dropped,
            "input truncated at capacity"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = ($capacity, $dropped);
    }};
}

/// Emits a `warn` event when a contract violation degrades to a no-op.
macro_rules! warn_contract_ignored {
    ($container:literal, $operation:literal, $len:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::warn!(
            container = $container,
            operation = $operation,
            len = $len,
            "contract violation ignored"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = $len;
    }};
}

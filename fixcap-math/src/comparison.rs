// FIXCAP - fixcap-math
// Module: Fuzzy numeric comparison
// SW-REQ-ID: REQ_MATH_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Exact and approximate comparison of primitive numbers.
//!
//! - [`close`] compares two values: fuzzy for floats, exact otherwise. Mixed
//!   `f32`/`f64` pairs are compared at `f32` precision.
//! - [`close_to_zero`] is [`close`] against zero of the same type.
//! - [`equal`] is exact comparison that does not use float `==` directly.
//! - [`positive`] and [`negative`] exclude values close to zero.
//!
//! The default relative tolerance is the machine epsilon times
//! [`DEFAULT_EPSILON_MULTIPLIER`]. The multiplier can be overridden at build
//! time with the `FIXCAP_FLOAT_COMPARISON_EPSILON_MULT` environment variable.
//!
//! ```
//! use fixcap_math::comparison::{close, negative, positive};
//!
//! assert!(close(0.1_f32, 0.1_f64));
//! assert!(!close(-0.1_f64, 0.1_f64));
//! assert!(positive(1e-4_f64));
//! assert!(!negative(0_i32));
//! ```

use fixcap_error::{Error, Result};

use crate::traits::{Float, Numeric};

/// Multiplier applied to the machine epsilon for the default relative tolerance.
pub const DEFAULT_EPSILON_MULTIPLIER: u32 =
    parse_multiplier(option_env!("FIXCAP_FLOAT_COMPARISON_EPSILON_MULT"));

#[allow(clippy::panic)]
const fn parse_multiplier(value: Option<&str>) -> u32 {
    let Some(text) = value else {
        return 10;
    };
    let digits = text.as_bytes();
    assert!(
        !digits.is_empty(),
        "FIXCAP_FLOAT_COMPARISON_EPSILON_MULT must not be empty"
    );

    let mut parsed: u32 = 0;
    let mut i = 0;
    while i < digits.len() {
        assert!(
            digits[i].is_ascii_digit(),
            "FIXCAP_FLOAT_COMPARISON_EPSILON_MULT must be a decimal integer"
        );
        parsed = match parsed.checked_mul(10) {
            Some(scaled) => scaled + (digits[i] - b'0') as u32,
            None => panic!("FIXCAP_FLOAT_COMPARISON_EPSILON_MULT is too large"),
        };
        i += 1;
    }
    assert!(parsed > 0, "FIXCAP_FLOAT_COMPARISON_EPSILON_MULT must be positive");
    parsed
}

/// Absolute and relative tolerance for [`close_within`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Differences up to this value are close regardless of magnitude
    pub absolute: T,
    /// Differences up to this fraction of the larger magnitude are close
    pub relative: T,
}

impl<T: Float> Tolerance<T> {
    /// Tolerance used by [`close`]: one epsilon absolute, the scaled epsilon
    /// relative.
    pub const DEFAULT: Self = Self {
        absolute: T::EPSILON,
        relative: T::DEFAULT_RELATIVE_EPSILON,
    };

    /// Creates a tolerance, rejecting negative or NaN bounds.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_TOLERANCE` parameter error if either bound is NaN
    /// or negative.
    pub fn new(absolute: T, relative: T) -> Result<Self> {
        let valid = |bound: T| !bound.is_nan() && bound >= T::ZERO;
        if valid(absolute) && valid(relative) {
            Ok(Self { absolute, relative })
        } else {
            Err(Error::invalid_tolerance(
                "tolerance bounds must be non-negative numbers",
            ))
        }
    }
}

impl<T: Float> Default for Tolerance<T> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Exact comparison.
///
/// Floats compare as `a <= b && a >= b`, so `0.0` equals `-0.0` and NaN
/// equals nothing. Other types use `==`.
#[inline]
#[must_use]
pub fn equal<T: Numeric>(a: T, b: T) -> bool {
    a.exactly_equal(b)
}

/// Fuzzy comparison with explicit tolerances.
///
/// NaN is never close. Infinities are close only to themselves. Otherwise the
/// values are close if their difference is within `absolute_epsilon`, or
/// within `relative_epsilon` times the larger magnitude.
#[must_use]
pub fn close_with<T: Float>(a: T, b: T, absolute_epsilon: T, relative_epsilon: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }

    if a.is_infinite() || b.is_infinite() {
        return equal(a, b);
    }

    // Near zero relative comparison is meaningless
    let difference = (a - b).magnitude();
    if difference <= absolute_epsilon {
        return true;
    }

    difference <= a.magnitude().larger(b.magnitude()) * relative_epsilon
}

/// Fuzzy comparison with a [`Tolerance`].
#[inline]
#[must_use]
pub fn close_within<T: Float>(a: T, b: T, tolerance: Tolerance<T>) -> bool {
    close_with(a, b, tolerance.absolute, tolerance.relative)
}

/// Values that can be compared with [`close`].
pub trait Close<Rhs = Self> {
    /// Returns `true` if `self` and `rhs` are close.
    fn close(self, rhs: Rhs) -> bool;
}

macro_rules! impl_close_float {
    ($($t:ty),+) => {
        $(
            impl Close for $t {
                #[inline]
                fn close(self, rhs: $t) -> bool {
                    close_within(self, rhs, Tolerance::DEFAULT)
                }
            }
        )+
    };
}

impl_close_float!(f32, f64);

// Mixed precision compares at the lower precision
#[allow(clippy::cast_possible_truncation)]
impl Close<f64> for f32 {
    #[inline]
    fn close(self, rhs: f64) -> bool {
        self.close(rhs as f32)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Close<f32> for f64 {
    #[inline]
    fn close(self, rhs: f32) -> bool {
        (self as f32).close(rhs)
    }
}

macro_rules! impl_close_exact {
    ($($t:ty),+) => {
        $(
            impl Close for $t {
                #[inline]
                fn close(self, rhs: $t) -> bool {
                    self == rhs
                }
            }
        )+
    };
}

impl_close_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Compares two values: fuzzy for floats, exact for integers.
#[inline]
#[must_use]
pub fn close<A: Close<B>, B>(a: A, b: B) -> bool {
    a.close(b)
}

/// Compares against zero of the same type.
#[inline]
#[must_use]
pub fn close_to_zero<T: Numeric>(x: T) -> bool {
    x.close_to_zero()
}

/// Strictly greater than zero and not close to zero.
#[inline]
#[must_use]
pub fn positive<T: Numeric>(x: T) -> bool {
    x > T::ZERO && !x.close_to_zero()
}

/// Strictly less than zero and not close to zero.
#[inline]
#[must_use]
pub fn negative<T: Numeric>(x: T) -> bool {
    x < T::ZERO && !x.close_to_zero()
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_sign_predicates_exclusive() {
        let x: f32 = kani::any();
        assert!(!(positive(x) && negative(x)));
        assert!(!(positive(x) && close_to_zero(x)));
        assert!(!(negative(x) && close_to_zero(x)));
    }

    #[kani::proof]
    fn verify_float_abs_non_negative() {
        let x: f64 = kani::any();
        kani::assume(!x.is_nan());
        assert!(x.magnitude() >= 0.0);
    }
}

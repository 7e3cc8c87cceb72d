// FIXCAP - fixcap-math
// Module: Numeric traits
// SW-REQ-ID: REQ_MATH_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Numeric traits behind the comparison functions.
//!
//! [`Numeric`] covers every primitive integer and float type and decides
//! whether equality is exact or fuzzy. [`Float`] is sealed to `f32` and `f64`
//! and supplies the machine epsilon and bit-level helpers that work without
//! `std`.

use core::ops::{Mul, Sub};

use crate::comparison::{close_with, DEFAULT_EPSILON_MULTIPLIER};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Primitive numbers that can be compared against zero.
pub trait Numeric: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;

    /// Bit-exact equality without a direct float `==`.
    fn exactly_equal(self, other: Self) -> bool;

    /// Fuzzy for floats, exact for integers.
    fn close_to_zero(self) -> bool;
}

/// IEEE 754 binary floating-point types.
pub trait Float: Numeric + sealed::Sealed + Sub<Output = Self> + Mul<Output = Self> {
    /// Difference between `1.0` and the next representable value.
    const EPSILON: Self;

    /// `EPSILON` scaled by [`DEFAULT_EPSILON_MULTIPLIER`].
    const DEFAULT_RELATIVE_EPSILON: Self;

    /// Returns `true` for NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` for positive or negative infinity.
    fn is_infinite(self) -> bool;

    /// Absolute value by clearing the sign bit.
    fn magnitude(self) -> Self;

    /// The larger of two non-NaN values.
    fn larger(self, other: Self) -> Self;
}

macro_rules! impl_float {
    ($t:ty, $bits:ty) => {
        impl Numeric for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn exactly_equal(self, other: Self) -> bool {
                self <= other && self >= other
            }

            #[inline]
            fn close_to_zero(self) -> bool {
                close_with(self, 0.0, Self::EPSILON, Self::DEFAULT_RELATIVE_EPSILON)
            }
        }

        impl Float for $t {
            const EPSILON: Self = <$t>::EPSILON;
            #[allow(clippy::cast_precision_loss)]
            const DEFAULT_RELATIVE_EPSILON: Self =
                <$t>::EPSILON * DEFAULT_EPSILON_MULTIPLIER as $t;

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }

            #[inline]
            fn magnitude(self) -> Self {
                const SIGN_MASK: $bits = 1 << (<$bits>::BITS - 1);
                <$t>::from_bits(self.to_bits() & !SIGN_MASK)
            }

            #[inline]
            fn larger(self, other: Self) -> Self {
                if self >= other { self } else { other }
            }
        }
    };
}

impl_float!(f32, u32);
impl_float!(f64, u64);

macro_rules! impl_integer {
    ($($t:ty),+) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;

                #[inline]
                fn exactly_equal(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn close_to_zero(self) -> bool {
                    self == 0
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_clears_sign() {
        assert_eq!((-1.5_f32).magnitude(), 1.5);
        assert_eq!((-0.0_f64).magnitude().to_bits(), 0.0_f64.to_bits());
        assert!(f64::NEG_INFINITY.magnitude().is_infinite());
    }

    #[test]
    fn test_default_relative_epsilon() {
        assert_eq!(
            f64::DEFAULT_RELATIVE_EPSILON,
            f64::EPSILON * f64::from(DEFAULT_EPSILON_MULTIPLIER)
        );
    }

    #[test]
    fn test_integers_are_exact() {
        assert!(0_u8.close_to_zero());
        assert!(!1_i64.close_to_zero());
        assert!(7_usize.exactly_equal(7));
    }
}

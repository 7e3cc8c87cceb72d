// FIXCAP - fixcap-foundation
// Module: Integer formatting into minimal-size static strings
// SW-REQ-ID: REQ_RESOURCE_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Integer to text conversion without allocation.
//!
//! Every primitive integer type can be formatted in any radix from 2 to 36
//! into a [`StaticString`] whose capacity is the worst-case digit count for
//! that type and radix, plus one for a sign where the type is signed. The
//! capacity is a compile-time constant, so the conversion itself never checks
//! for overflow.
//!
//! Digits use the alphabet `0-9a-z`.
//!
//! Decimal conversion is also available as a `const fn` per type
//! ([`i32_to_string`], [`u64_to_string`], ...) for use in constants and
//! statics.
//!
//! # Examples
//!
//! ```
//! use fixcap_foundation::int_to_string::{int_to_string, int_to_string_radix};
//!
//! assert_eq!(int_to_string(-128_i8), "-128");
//! assert_eq!(int_to_string_radix::<16, _>(123_456_u32), "1e240");
//!
//! // Capacity covers the widest value of the type.
//! assert_eq!(int_to_string(0_i32).capacity(), 11);
//!
//! const ANSWER: fixcap_foundation::StaticString<11> =
//!     fixcap_foundation::int_to_string::i32_to_string(-42);
//! assert_eq!(ANSWER, "-42");
//! ```

use crate::collections::StaticString;

/// Digit alphabet shared by all radixes.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returns the worst-case text length of an integer type in `radix`.
///
/// `bits` is the width of the type and `signed` adds room for a leading `-`.
/// For signed types the widest magnitude is that of the minimum value.
///
/// ```
/// use fixcap_foundation::int_to_string::max_text_len;
///
/// assert_eq!(max_text_len(8, true, 10), 4);    // "-128"
/// assert_eq!(max_text_len(8, false, 2), 8);    // "11111111"
/// assert_eq!(max_text_len(64, false, 10), 20); // u64::MAX
/// ```
#[must_use]
pub const fn max_text_len(bits: u32, signed: bool, radix: u8) -> usize {
    assert!(radix >= 2 && radix <= 36, "radix must be in 2..=36");
    assert!(bits > 0 && bits <= 128, "integer width must be in 1..=128");

    let mut magnitude: u128 = if signed {
        1 << (bits - 1)
    } else if bits == 128 {
        u128::MAX
    } else {
        (1 << bits) - 1
    };

    let mut len = if signed { 1 } else { 0 };
    loop {
        len += 1;
        magnitude /= radix as u128;
        if magnitude == 0 {
            break;
        }
    }
    len
}

/// Integers that can be formatted in radix `R`.
///
/// Implemented for every primitive integer type and every radix in `2..=36`.
pub trait FormatRadix<const R: u8>: Copy {
    /// The exactly sized result buffer.
    type Output;

    /// Formats `self`, most significant digit first.
    fn format_radix(self) -> Self::Output;
}

/// Formats `value` in decimal.
#[inline]
#[must_use]
pub fn int_to_string<T: FormatRadix<10>>(value: T) -> T::Output {
    value.format_radix()
}

/// Formats `value` in radix `R`.
///
/// ```
/// use fixcap_foundation::int_to_string::int_to_string_radix;
///
/// assert_eq!(int_to_string_radix::<2, _>(123_456_i32), "11110001001000000");
/// assert_eq!(int_to_string_radix::<36, _>(-35_i64), "-z");
/// ```
#[inline]
#[must_use]
pub fn int_to_string_radix<const R: u8, T: FormatRadix<R>>(value: T) -> T::Output {
    value.format_radix()
}

/// Writes `value` into the tail of `buf` and returns the start offset.
///
/// Remainders are taken on the signed value so the minimum of every signed
/// type formats without negation overflow.
#[allow(clippy::cast_lossless)]
const fn write_signed(mut value: i128, radix: u8, buf: &mut [u8]) -> usize {
    let negative = value < 0;
    let radix = radix as i128;
    let mut start = buf.len();
    loop {
        // |value % radix| < 36
        let digit = (value % radix).unsigned_abs() as usize;
        start -= 1;
        buf[start] = DIGITS[digit];
        value /= radix;
        if value == 0 {
            break;
        }
    }
    if negative {
        start -= 1;
        buf[start] = b'-';
    }
    start
}

#[allow(clippy::cast_lossless)]
const fn write_unsigned(mut value: u128, radix: u8, buf: &mut [u8]) -> usize {
    let radix = radix as u128;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = DIGITS[(value % radix) as usize];
        value /= radix;
        if value == 0 {
            break;
        }
    }
    start
}

macro_rules! impl_format_radix {
    (@radix $t:ty, $signed:expr, $writer:ident, $wide:ty; $($r:literal)+) => {
        $(
            impl FormatRadix<$r> for $t {
                type Output = StaticString<{ max_text_len(<$t>::BITS, $signed, $r) }>;

                #[allow(clippy::cast_lossless)]
                fn format_radix(self) -> Self::Output {
                    let mut buf = [0_u8; max_text_len(<$t>::BITS, $signed, $r)];
                    let start = $writer(self as $wide, $r, &mut buf);
                    StaticString::from_tail(&buf, start)
                }
            }
        )+
    };
    ($signed:expr, $writer:ident, $wide:ty; $($t:ty),+) => {
        $(
            impl_format_radix!(@radix $t, $signed, $writer, $wide;
                2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19
                20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36);
        )+
    };
}

// Every source type widens losslessly into the 128-bit working type.
impl_format_radix!(true, write_signed, i128; i8, i16, i32, i64, i128, isize);
impl_format_radix!(false, write_unsigned, u128; u8, u16, u32, u64, u128, usize);

macro_rules! impl_const_decimal {
    ($($name:ident($t:ty, $signed:expr, $writer:ident, $wide:ty);)+) => {
        $(
            #[doc = concat!("Formats a `", stringify!($t), "` in decimal in a constant context.")]
            #[must_use]
            #[allow(clippy::cast_lossless)]
            pub const fn $name(value: $t) -> StaticString<{ max_text_len(<$t>::BITS, $signed, 10) }> {
                let mut buf = [0_u8; max_text_len(<$t>::BITS, $signed, 10)];
                let start = $writer(value as $wide, 10, &mut buf);
                StaticString::from_tail(&buf, start)
            }
        )+
    };
}

impl_const_decimal! {
    i8_to_string(i8, true, write_signed, i128);
    i16_to_string(i16, true, write_signed, i128);
    i32_to_string(i32, true, write_signed, i128);
    i64_to_string(i64, true, write_signed, i128);
    i128_to_string(i128, true, write_signed, i128);
    isize_to_string(isize, true, write_signed, i128);
    u8_to_string(u8, false, write_unsigned, u128);
    u16_to_string(u16, false, write_unsigned, u128);
    u32_to_string(u32, false, write_unsigned, u128);
    u64_to_string(u64, false, write_unsigned, u128);
    u128_to_string(u128, false, write_unsigned, u128);
    usize_to_string(usize, false, write_unsigned, u128);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(max_text_len(8, true, 10), 4);
        assert_eq!(max_text_len(16, true, 10), 6);
        assert_eq!(max_text_len(32, true, 10), 11);
        assert_eq!(max_text_len(64, true, 10), 20);
        assert_eq!(max_text_len(64, false, 10), 20);
        assert_eq!(max_text_len(128, false, 16), 32);
        assert_eq!(max_text_len(32, true, 2), 33);
        assert_eq!(max_text_len(32, false, 36), 7);
    }

    #[test]
    fn test_zero_and_unit() {
        assert_eq!(int_to_string(0_i32), "0");
        assert_eq!(int_to_string(1_i32), "1");
        assert_eq!(int_to_string(-1_i32), "-1");
        assert_eq!(int_to_string(0_u8), "0");
    }

    #[test]
    fn test_signed_minimum_without_overflow() {
        assert_eq!(int_to_string(i8::MIN), "-128");
        assert_eq!(int_to_string(i128::MIN), "-170141183460469231731687303715884105728");
        assert_eq!(int_to_string_radix::<2, _>(i8::MIN), "-10000000");
    }

    #[test]
    fn test_const_decimal_in_constant_context() {
        const SMALLEST: StaticString<4> = i8_to_string(i8::MIN);
        static WIDEST: StaticString<39> = u128_to_string(u128::MAX);

        assert_eq!(SMALLEST, "-128");
        assert_eq!(WIDEST, "340282366920938463463374607431768211455");
        assert_eq!(u16_to_string(0), "0");
        assert_eq!(i64_to_string(-7), int_to_string(-7_i64));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pointer_sized() {
        assert_eq!(int_to_string(usize::MAX), "18446744073709551615");
        assert_eq!(int_to_string(isize::MIN), "-9223372036854775808");
    }
}

// FIXCAP - fixcap-error
// Module: Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::fmt;

use crate::codes;

/// `Error` categories for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// The operation would grow a container past its capacity
    Capacity   = 1,
    /// An index or access was outside the logical length
    Bounds     = 2,
    /// An argument was rejected
    Parameter  = 3,
    /// Content could not be converted to the requested representation
    Conversion = 4,
}

/// Container `Error` type
///
/// Small, `Copy` and allocation-free so it can be returned from `no_std`
/// code without any provider or formatter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Container capacity exceeded",
    );
    /// Invalid UTF-8 error
    pub const INVALID_UTF8: Self = Self::new(
        ErrorCategory::Conversion,
        codes::INVALID_UTF8,
        "Content is not valid UTF-8",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create a length-exceeds-capacity error
    #[must_use]
    pub const fn length_exceeds_capacity(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Capacity,
            codes::LENGTH_EXCEEDS_CAPACITY,
            message,
        )
    }

    /// Create a source-too-long error
    #[must_use]
    pub const fn source_too_long(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::SOURCE_TOO_LONG, message)
    }

    /// Create an index out of bounds error
    #[must_use]
    pub const fn index_out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_BOUNDS, message)
    }

    /// Create an empty container error
    #[must_use]
    pub const fn empty_container(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::EMPTY_CONTAINER, message)
    }

    /// Create an invalid tolerance error
    #[must_use]
    pub const fn invalid_tolerance(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::INVALID_TOLERANCE, message)
    }

    /// Create an invalid UTF-8 error
    #[must_use]
    pub const fn invalid_utf8(message: &'static str) -> Self {
        Self::new(ErrorCategory::Conversion, codes::INVALID_UTF8, message)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub const fn is_capacity_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Capacity)
    }

    /// Check if this is a bounds error
    #[must_use]
    pub const fn is_bounds_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Bounds)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl core::error::Error for Error {}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::new(
            ErrorCategory::Conversion,
            codes::FORMAT_ERROR,
            "Formatting error (static)",
        )
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Self::INVALID_UTF8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_category_and_code() {
        let error = Error::capacity_exceeded("full");
        assert_eq!(error.category, ErrorCategory::Capacity);
        assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
        assert_eq!(error.message, "full");
        assert!(error.is_capacity_error());
        assert!(!error.is_bounds_error());

        let error = Error::index_out_of_bounds("index 12 >= len 3");
        assert_eq!(error.category, ErrorCategory::Bounds);
        assert_eq!(error.code, codes::INDEX_OUT_OF_BOUNDS);
        assert!(error.is_bounds_error());
    }

    #[test]
    fn test_utf8_conversion() {
        let bytes = [0xff_u8, 0xfe];
        let utf8_error = core::str::from_utf8(&bytes).unwrap_err();
        let error: Error = utf8_error.into();
        assert_eq!(error, Error::INVALID_UTF8);
    }

    #[test]
    fn test_const_errors() {
        const ERROR: Error = Error::source_too_long("source exceeds capacity");
        assert_eq!(ERROR.code, codes::SOURCE_TOO_LONG);
        assert_eq!(Error::CAPACITY_EXCEEDED.category, ErrorCategory::Capacity);
    }
}

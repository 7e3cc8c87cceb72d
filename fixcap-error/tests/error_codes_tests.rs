//! Tests for error constants and display formatting
//! This ensures all error codes are unique and stay inside their ranges

use std::collections::HashSet;

use fixcap_error::{codes, Error, ErrorCategory};

#[test]
fn test_all_error_codes_are_unique() {
    let mut seen_codes = HashSet::new();

    // Capacity error codes (1000-1099)
    let capacity_codes = [
        codes::CAPACITY_EXCEEDED,
        codes::LENGTH_EXCEEDS_CAPACITY,
        codes::SOURCE_TOO_LONG,
    ];
    for code in &capacity_codes {
        assert!(seen_codes.insert(*code), "Duplicate error code: {}", code);
        assert!(
            (1000..1100).contains(code),
            "Capacity error code {} out of range",
            code
        );
    }

    // Bounds error codes (1100-1199)
    let bounds_codes = [codes::INDEX_OUT_OF_BOUNDS, codes::EMPTY_CONTAINER];
    for code in &bounds_codes {
        assert!(seen_codes.insert(*code), "Duplicate error code: {}", code);
        assert!(
            (1100..1200).contains(code),
            "Bounds error code {} out of range",
            code
        );
    }

    // Parameter error codes (1300-1399)
    assert!(seen_codes.insert(codes::INVALID_TOLERANCE));
    assert!((1300..1400).contains(&codes::INVALID_TOLERANCE));

    // Conversion error codes (1200-1299)
    let conversion_codes = [codes::INVALID_UTF8, codes::FORMAT_ERROR];
    for code in &conversion_codes {
        assert!(seen_codes.insert(*code), "Duplicate error code: {}", code);
        assert!(
            (1200..1300).contains(code),
            "Conversion error code {} out of range",
            code
        );
    }
}

#[test]
fn test_display_includes_category_code_and_message() {
    let error = Error::length_exceeds_capacity("resize past capacity");
    let rendered = error.to_string();
    assert_eq!(rendered, "[Capacity][E03E9] resize past capacity");
}

#[test]
fn test_fmt_error_conversion() {
    let error: Error = core::fmt::Error.into();
    assert_eq!(error.category, ErrorCategory::Conversion);
    assert_eq!(error.code, codes::FORMAT_ERROR);
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::CAPACITY_EXCEEDED);
}

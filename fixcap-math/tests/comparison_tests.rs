//! Integration tests for exact, fuzzy and sign comparison

use fixcap_math::{
    close, close_to_zero, close_with, equal, negative, positive, Tolerance,
    DEFAULT_EPSILON_MULTIPLIER,
};
use proptest::prelude::*;

#[test]
fn test_same_precision() {
    assert!(close(0.1_f64, 0.1_f64));
    assert!(close(0.1_f32, 0.1_f32));
    assert!(close(0.1_f64 + 0.2, 0.3_f64));
    assert!(!close(-0.1_f64, 0.1_f64));
}

#[test]
fn test_mixed_precision_in_both_orders() {
    assert!(close(0.1_f32, 0.1_f64));
    assert!(close(0.1_f64, 0.1_f32));
    assert!(!close(-0.1_f32, 0.0_f64));
    assert!(!close(0.0_f64, -0.1_f32));
}

#[test]
fn test_integers_compare_exactly() {
    assert!(close(3_u8, 3_u8));
    assert!(!close(3_i64, 4_i64));
    assert!(equal(usize::MAX, usize::MAX));
}

#[test]
fn test_exact_equality() {
    assert!(equal(0.0_f64, -0.0_f64));
    assert!(!equal(0.1_f64 + 0.2, 0.3_f64));
    assert!(equal(f32::INFINITY, f32::INFINITY));
}

#[test]
fn test_explicit_tolerances() {
    assert!(close_with(1.0_f64, 1.05, 0.1, 0.0));
    assert!(!close_with(1.0_f64, 1.05, 0.01, 0.0));
    assert!(close_with(100.0_f64, 101.0, 0.0, 0.01));
    assert!(!close_with(100.0_f64, 102.0, 0.0, 0.01));
}

#[test]
fn test_default_tolerance() {
    let tolerance = Tolerance::<f32>::default();
    assert_eq!(tolerance.absolute, f32::EPSILON);
    assert!(tolerance.relative > f32::EPSILON);
    assert!(DEFAULT_EPSILON_MULTIPLIER > 0);
}

#[test]
fn test_sign_predicates() {
    assert!(positive(1e-4_f64));
    assert!(!negative(1e-4_f64));
    assert!(!positive(-1e-4_f64));
    assert!(negative(-1e-4_f64));
    assert!(!positive(0_i32));
    assert!(!negative(0_i32));
    assert!(positive(1_u8));
}

#[test]
fn test_values_near_zero_have_no_sign() {
    let tiny = f64::EPSILON / 2.0;
    assert!(close_to_zero(tiny));
    assert!(!positive(tiny));
    assert!(!negative(-tiny));
    assert!(close_to_zero(0_u32));
}

proptest! {
    #[test]
    fn sign_predicates_partition_non_nan(x in any::<f64>()) {
        prop_assume!(!x.is_nan());
        let holds = [positive(x), negative(x), close_to_zero(x)];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
    }

    #[test]
    fn close_is_symmetric(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
        prop_assert_eq!(close(a, b), close(b, a));
    }

    #[test]
    fn every_finite_value_is_close_to_itself(x in any::<f32>()) {
        prop_assume!(x.is_finite());
        prop_assert!(close(x, x));
    }
}

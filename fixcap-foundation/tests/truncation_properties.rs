//! Property tests for the silent truncation and resize laws

use fixcap_foundation::{int_to_string, StaticString, StaticVec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn string_keeps_prefix_up_to_capacity(text in "[a-zA-Z0-9 ]{0,40}") {
        let s = StaticString::<16>::from(text.as_str());
        let expected = &text.as_bytes()[..text.len().min(16)];
        prop_assert_eq!(s.as_bytes(), expected);
        prop_assert_eq!(s.as_bytes_with_nul()[s.len()], 0);
    }

    #[test]
    fn vec_keeps_prefix_up_to_capacity(values in proptest::collection::vec(any::<i64>(), 0..40)) {
        let vec: StaticVec<i64, 12> = values.iter().copied().collect();
        prop_assert_eq!(vec.as_slice(), &values[..values.len().min(12)]);
    }

    #[test]
    fn concat_is_logical_concatenation(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let left = StaticString::<8>::from(a.as_str());
        let right = StaticString::<8>::from(b.as_str());
        let joined: StaticString<16> = left.concat(&right);
        let expected = format!("{a}{b}");
        prop_assert_eq!(joined.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn shrinking_resizes_compose(start in 0_usize..=10, k in 0_usize..=10, j in 0_usize..=10) {
        prop_assume!(j <= k);
        let mut base = StaticVec::<u8, 10>::new();
        base.resize(start, 1);

        let mut twice = base;
        twice.resize(k, 2);
        twice.resize(j, 2);

        let mut once = base;
        once.resize(j, 2);

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn decimal_matches_core(value in any::<i64>()) {
        let formatted = int_to_string(value);
        let expected = value.to_string();
        prop_assert_eq!(formatted.as_bytes(), expected.as_bytes());
    }
}

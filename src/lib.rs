//! Linear and binary search over slices of integers, floats and ordered elements.
//!
//! Three algorithm families share one calling convention: they take a slice and a
//! target and return an `isize` position. They differ in how a miss is reported.
//!
//! # Algorithms
//!
//! - **Linear** ([`linear_search`], [`linear_search_float`], etc.): O(n) scan of
//!   any slice, returns the first match or `-1`.
//! - **Iterative binary** ([`iterative_binary_search`], etc.): O(log n) over a
//!   half-open window with O(1) extra space, returns a match or `-1`.
//! - **Recursive binary** ([`recursive_binary_search`], etc.): O(log n) over an
//!   inclusive window with O(log n) stack, returns a match or `!insertion_point`.
//!
//! Every family has an `Ord` variant (integers, strings, anything totally
//! ordered), a float variant comparing with `|a - b| < epsilon` where epsilon
//! defaults to the [machine epsilon](machine_epsilon) of the element type, and
//! a float variant taking the epsilon explicitly. The binary searches also take
//! a comparator (`*_by`); the linear search takes a predicate.
//!
//! # Miss encodings
//!
//! The two binary searches deliberately disagree on misses: the iterative one
//! returns `-1`, the recursive one the bitwise complement of the insertion point.
//! Use [`decode_sentinel`] and [`decode_complement`] respectively.
//!
//! Binary searches do not check that the input is sorted; [`check_sorted`] is
//! available for callers who need to.

mod epsilon;
mod error;
mod iterative;
mod linear;
mod position;
mod recursive;

pub use epsilon::*;
pub use error::*;
pub use iterative::{
    iterative_binary_search, iterative_binary_search_by, iterative_binary_search_float,
    iterative_binary_search_float_with_epsilon,
};
pub use linear::*;
pub use position::*;
pub use recursive::*;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scenario_binary_hit() {
        let values = [1, 3, 5, 7, 9];
        assert_eq!(iterative_binary_search(&values, &5), 2);
        assert_eq!(recursive_binary_search(&values, &5), 2);
        assert_eq!(iterative_binary_search_by(&values, &5, |a, b| a.cmp(b)), 2);
        assert_eq!(recursive_binary_search_by(&values, &5, |a, b| a.cmp(b)), 2);
    }

    #[test]
    fn scenario_binary_miss_encodings_differ() {
        let values = [1, 3, 5, 7, 9];
        let iterative = iterative_binary_search(&values, &4);
        let recursive = recursive_binary_search(&values, &4);

        assert_eq!(iterative, -1);
        assert_eq!(recursive, -3);
        assert_eq!(recursive, !2);
        assert_eq!(decode_sentinel(iterative), None);
        assert_eq!(decode_complement(recursive), Err(2));
    }

    #[test]
    fn scenario_linear_first_match() {
        assert_eq!(linear_search(&[5, 3, 5, 1], &5), 0);
    }

    #[test]
    fn scenario_float_within_tolerance() {
        // At magnitude 1.0 these two literals land one f32 ulp apart, which is
        // exactly the machine epsilon and fails the strict comparison.
        let values = [1.000_000_1f32, 2.0, 3.0];
        let target = 1.000_000_2f32;
        assert_eq!(iterative_binary_search_float(&values, target), -1);

        let epsilon = 2.0 * machine_epsilon_f32();
        assert_eq!(iterative_binary_search_float_with_epsilon(&values, target, epsilon), 0);
        assert_eq!(recursive_binary_search_float_with_epsilon(&values, target, epsilon), 0);
        assert_eq!(linear_search_float_with_epsilon(&values, target, epsilon), 0);

        // Below 1.0 the ulp is finer than epsilon, so distinct values can match.
        let values = [1.0e-8f32, 2.0, 3.0];
        let target = 2.0e-8f32;
        assert_eq!(iterative_binary_search_float(&values, target), 0);
        assert_eq!(recursive_binary_search_float(&values, target), 0);
        assert_eq!(linear_search_float(&values, target), 0);
    }

    #[test]
    fn scenario_mismatched_comparator_terminates() {
        let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"];
        let mut calls = 0usize;
        let result = iterative_binary_search_by(&words, &"echo", |a, b| {
            calls += 1;
            b.cmp(a)
        });
        assert!(result == -1 || (0..words.len() as isize).contains(&result));
        assert!(calls <= 3);

        calls = 0;
        let result = recursive_binary_search_by(&words, &"echo", |a, b| {
            calls += 1;
            b.cmp(a)
        });
        assert!(result < words.len() as isize);
        assert!(calls <= 3);
    }

    proptest! {
        #[test]
        fn families_agree_on_hits(mut values in prop::collection::vec(any::<i64>(), 1..256), pick in any::<prop::sample::Index>()) {
            values.sort();
            let target = values[pick.index(values.len())];

            let iterative = iterative_binary_search(&values, &target);
            let recursive = recursive_binary_search(&values, &target);
            let linear = linear_search(&values, &target);

            prop_assert!(iterative >= 0 && recursive >= 0 && linear >= 0);
            prop_assert_eq!(values[iterative as usize], target);
            prop_assert_eq!(values[recursive as usize], target);
            prop_assert!(linear <= iterative && linear <= recursive);
        }

        #[test]
        fn families_disagree_on_misses_only_in_encoding(mut values in prop::collection::vec(0i32..1000, 0..128), target in 0i32..1000) {
            values.sort();
            prop_assume!(values.binary_search(&target).is_err());

            prop_assert_eq!(linear_search(&values, &target), NOT_FOUND);
            prop_assert_eq!(iterative_binary_search(&values, &target), NOT_FOUND);
            let slot = values.partition_point(|&v| v < target);
            prop_assert_eq!(decode_complement(recursive_binary_search(&values, &target)), Err(slot));
        }
    }
}

//! Linear search over unsorted slices.
//!
//! Scans from index 0 forward and returns the *first* matching index, or
//! [`NOT_FOUND`] when nothing matches. No ordering precondition.
//!
//! | Function | Equality |
//! |----------|----------|
//! | [`linear_search`] | `PartialEq` (exact for integers) |
//! | [`linear_search_by`] | caller predicate |
//! | [`linear_search_float`] | `\|a - b\| < machine epsilon` |
//! | [`linear_search_float_with_epsilon`] | `\|a - b\| < epsilon` |
//!
//! Time is O(n), auxiliary space O(1).

use crate::epsilon::MachineEpsilon;
use crate::position::NOT_FOUND;

/// First index whose element equals `target`, or `-1`.
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> isize {
    linear_search_by(values, |value| value == target)
}

/// First index whose element satisfies `predicate`, or `-1`.
pub fn linear_search_by<T, P>(values: &[T], mut predicate: P) -> isize
where
    P: FnMut(&T) -> bool,
{
    for (idx, value) in values.iter().enumerate() {
        if predicate(value) {
            return idx as isize;
        }
    }
    NOT_FOUND
}

/// Float linear search using the machine epsilon of `F` as tolerance.
pub fn linear_search_float<F: MachineEpsilon>(values: &[F], target: F) -> isize {
    linear_search_float_with_epsilon(values, target, F::machine_epsilon())
}

/// Float linear search with an explicit tolerance.
///
/// Elements within strictly less than `epsilon` of `target` match; NaN never does.
pub fn linear_search_float_with_epsilon<F: MachineEpsilon>(
    values: &[F],
    target: F,
    epsilon: F,
) -> isize {
    linear_search_by(values, |&value| (target - value).abs() < epsilon)
}

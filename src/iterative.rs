//! Iterative binary search over sorted slices.
//!
//! Narrows a half-open window `[start, end)` until the target is found or the
//! window is empty. A miss returns [`NOT_FOUND`] (`-1`), *not* the complement
//! encoding of [`recursive_binary_search`](crate::recursive_binary_search):
//! the insertion point is discarded. Keep the two apart when decoding results
//! (see [`position`](crate::position)).
//!
//! # Variants
//!
//! | Function | Ordering |
//! |----------|----------|
//! | [`iterative_binary_search`] | `Ord` (integers, strings, any totally ordered type) |
//! | [`iterative_binary_search_by`] | caller comparator |
//! | [`iterative_binary_search_float`] | `<`, with equality at machine epsilon |
//! | [`iterative_binary_search_float_with_epsilon`] | `<`, with equality at `epsilon` |
//!
//! The slice must be sorted ascending under the ordering used; otherwise the
//! result is an arbitrary index or `-1`. With duplicates any matching index may
//! be returned.
//!
//! Time is O(log n), auxiliary space O(1).

use std::cmp::Ordering;

use crate::epsilon::MachineEpsilon;
use crate::position::NOT_FOUND;

/// Binary search using the natural order of `T`. Returns `-1` on miss.
pub fn iterative_binary_search<T: Ord>(values: &[T], target: &T) -> isize {
    search_window(values, |value| target.cmp(value))
}

/// Binary search with an explicit comparator, called as `compare(target, element)`.
///
/// `compare` must agree with the order `values` is sorted in.
pub fn iterative_binary_search_by<T, C>(values: &[T], target: &T, mut compare: C) -> isize
where
    C: FnMut(&T, &T) -> Ordering,
{
    search_window(values, |value| compare(target, value))
}

/// Float binary search using the machine epsilon of `F` as tolerance.
pub fn iterative_binary_search_float<F: MachineEpsilon>(values: &[F], target: F) -> isize {
    iterative_binary_search_float_with_epsilon(values, target, F::machine_epsilon())
}

/// Float binary search treating `|target - element| < epsilon` as a hit.
pub fn iterative_binary_search_float_with_epsilon<F: MachineEpsilon>(
    values: &[F],
    target: F,
    epsilon: F,
) -> isize {
    search_window(values, |&value| probe_float(target, value, epsilon))
}

/// Three-way compare of `target` against a float element under a tolerance.
///
/// Anything that is neither within tolerance nor strictly below the element
/// (including NaN) steers right.
#[inline]
pub(crate) fn probe_float<F: MachineEpsilon>(target: F, value: F, epsilon: F) -> Ordering {
    if (target - value).abs() < epsilon {
        Ordering::Equal
    } else if target < value {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// `probe` reports how the target compares to the element it is given.
fn search_window<T, P>(values: &[T], mut probe: P) -> isize
where
    P: FnMut(&T) -> Ordering,
{
    let mut start = 0usize;
    let mut end = values.len();
    while start < end {
        let middle = start + (end - start) / 2;
        match probe(&values[middle]) {
            Ordering::Equal => return middle as isize,
            Ordering::Less => end = middle,
            Ordering::Greater => start = middle + 1,
        }
    }
    NOT_FOUND
}

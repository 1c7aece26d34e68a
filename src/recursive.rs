//! Recursive binary search over sorted slices.
//!
//! Each step halves an *inclusive* window `[start, end]` and recurses into
//! `[start, middle - 1]` or `[middle + 1, end]`. When the window empties the
//! result is `!start`, the bitwise complement of the insertion point. A negative
//! result therefore never collides with index 0, and
//! [`decode_complement`](crate::decode_complement) turns it back into the
//! `Result` shape of [`slice::binary_search`].
//!
//! This differs from [`iterative_binary_search`](crate::iterative_binary_search),
//! which returns a plain `-1` on miss.
//!
//! Recursion depth is bounded by `log2(len) + 1`, so the stack cost is at most
//! a few dozen frames even for the largest slices.
//!
//! Time is O(log n), auxiliary space O(log n).

use std::cmp::Ordering;

use crate::epsilon::MachineEpsilon;
use crate::iterative::probe_float;

/// Binary search using the natural order of `T`.
///
/// Returns the index of a match, or `!insertion_point` on miss.
pub fn recursive_binary_search<T: Ord>(values: &[T], target: &T) -> isize {
    let mut probe = |value: &T| target.cmp(value);
    search_range(values, &mut probe, 0, last_index(values))
}

/// Binary search with an explicit comparator, called as `compare(target, element)`.
pub fn recursive_binary_search_by<T, C>(values: &[T], target: &T, mut compare: C) -> isize
where
    C: FnMut(&T, &T) -> Ordering,
{
    let mut probe = |value: &T| compare(target, value);
    search_range(values, &mut probe, 0, last_index(values))
}

/// Float binary search using the machine epsilon of `F` as tolerance.
pub fn recursive_binary_search_float<F: MachineEpsilon>(values: &[F], target: F) -> isize {
    recursive_binary_search_float_with_epsilon(values, target, F::machine_epsilon())
}

/// Float binary search treating `|target - element| < epsilon` as a hit.
pub fn recursive_binary_search_float_with_epsilon<F: MachineEpsilon>(
    values: &[F],
    target: F,
    epsilon: F,
) -> isize {
    let mut probe = |value: &F| probe_float(target, *value, epsilon);
    search_range(values, &mut probe, 0, last_index(values))
}

#[inline]
fn last_index<T>(values: &[T]) -> isize {
    values.len() as isize - 1
}

fn search_range<T, P>(values: &[T], probe: &mut P, start: isize, end: isize) -> isize
where
    P: FnMut(&T) -> Ordering,
{
    if start > end {
        return !start;
    }
    let middle = start + ((end - start) >> 1);
    match probe(&values[middle as usize]) {
        Ordering::Less => search_range(values, probe, start, middle - 1),
        Ordering::Greater => search_range(values, probe, middle + 1, end),
        Ordering::Equal => middle,
    }
}

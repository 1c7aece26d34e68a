//! Opt-in precondition checks.
//!
//! None of the searches validate their input: a binary search over an unsorted
//! slice returns some index or miss value without panicking, but the value is
//! meaningless. Callers that cannot guarantee their input can check it once up
//! front with the functions here.

use std::cmp::Ordering;

use num_traits::Float;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `values[index]` is greater than `values[index + 1]`, or the two are unordered.
    #[error("slice is not sorted ascending at index {index}")]
    Unsorted { index: usize },
    #[error("epsilon must be finite and strictly positive")]
    InvalidEpsilon,
}

/// Checks that `values` is sorted ascending under its natural order.
///
/// Adjacent elements that do not compare (NaN) count as out of order.
pub fn check_sorted<T: PartialOrd>(values: &[T]) -> Result<(), SearchError> {
    check_sorted_by(values, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Greater))
}

/// Checks that `values` is sorted ascending under `compare`.
///
/// Pass the same comparator given to the `*_by` searches.
pub fn check_sorted_by<T, C>(values: &[T], mut compare: C) -> Result<(), SearchError>
where
    C: FnMut(&T, &T) -> Ordering,
{
    match values
        .windows(2)
        .position(|pair| compare(&pair[0], &pair[1]) == Ordering::Greater)
    {
        Some(index) => Err(SearchError::Unsorted { index }),
        None => Ok(()),
    }
}

/// Checks that `epsilon` is usable as an equality tolerance.
pub fn check_epsilon<F: Float>(epsilon: F) -> Result<(), SearchError> {
    if epsilon.is_finite() && epsilon > F::zero() {
        Ok(())
    } else {
        Err(SearchError::InvalidEpsilon)
    }
}

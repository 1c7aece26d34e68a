//! Decoding of search results.
//!
//! The search families encode a miss differently:
//!
//! | Family | Hit | Miss |
//! |--------|-----|------|
//! | [`linear_search`](crate::linear_search) | first matching index | `-1` |
//! | [`iterative_binary_search`](crate::iterative_binary_search) | any matching index | `-1` |
//! | [`recursive_binary_search`](crate::recursive_binary_search) | any matching index | `!insertion_point` |
//!
//! The iterative and recursive binary searches share a hit path but not a miss
//! path. Mixing up the decoders below silently turns "insert at 0" into "not found".

/// Miss value of the linear and iterative searches.
pub const NOT_FOUND: isize = -1;

/// Decodes a `-1`-sentinel result.
///
/// Use for [`linear_search`](crate::linear_search) and
/// [`iterative_binary_search`](crate::iterative_binary_search) families.
#[inline]
pub fn decode_sentinel(encoded: isize) -> Option<usize> {
    usize::try_from(encoded).ok()
}

/// Decodes a complement-encoded result into the shape of [`slice::binary_search`].
///
/// Use for the [`recursive_binary_search`](crate::recursive_binary_search) family.
/// `Err` carries the index at which the target could be inserted while keeping
/// the slice sorted.
#[inline]
pub fn decode_complement(encoded: isize) -> Result<usize, usize> {
    if encoded >= 0 {
        Ok(encoded as usize)
    } else {
        Err(!encoded as usize)
    }
}

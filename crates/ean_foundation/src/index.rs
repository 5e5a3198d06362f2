//! Negative-index addressing.
//!
//! Positions may be given relative to the end of a sequence: `-1` is the
//! last element and `-len` the first. Valid indices are `[-len, len)`.

/// Maps a possibly negative `index` into `0..len`.
///
/// Returns `None` when `index` falls outside `[-len, len)`.
#[must_use]
pub fn normalize(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let index = index.unsigned_abs();
        (index < len).then_some(index)
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

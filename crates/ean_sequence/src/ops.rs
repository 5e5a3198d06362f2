//! Free functions over sequences.

use std::ops::{Bound, RangeBounds};

use ean_foundation::{Error, Result};

use crate::Sequence;

/// Builds a sequence from a list of elements.
///
/// ```
/// use ean_sequence::sequence;
///
/// let s = sequence![1, 2, 3];
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::ops::of_elements([$($elem),+])
    };
}

/// Builds a sequence holding `elements` in order.
pub fn of_elements<T: Clone>(elements: impl IntoIterator<Item = T>) -> Sequence<T> {
    elements.into_iter().collect()
}

/// Returns the elements of `a` followed by the elements of `b`.
#[must_use]
pub fn concat<T: Clone>(a: &Sequence<T>, b: &Sequence<T>) -> Sequence<T> {
    let mut result = a.clone();
    result.extend(b.iter().cloned());
    result
}

/// Returns `sequence` without its first element.
#[must_use]
pub fn rest<T: Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    sequence.iter().skip(1).cloned().collect()
}

/// Returns an independent copy of `sequence`.
///
/// Storage is shared until either side is modified.
#[must_use]
pub fn copy<T: Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    sequence.clone()
}

/// Returns the elements in `range`.
///
/// An unbounded start is `0` and an unbounded end is `len()`; an end past
/// `len()` is clamped to it.
///
/// # Errors
///
/// Returns `InvalidSlice` when the start is not strictly below the
/// (clamped) end. This includes `slice(&empty, ..)`.
pub fn slice<T: Clone>(sequence: &Sequence<T>, range: impl RangeBounds<usize>) -> Result<Sequence<T>> {
    let len = sequence.len();
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    }
    .min(len);

    if start >= end {
        return Err(Error::invalid_slice(start, end));
    }
    Ok(sequence.iter().skip(start).take(end - start).cloned().collect())
}

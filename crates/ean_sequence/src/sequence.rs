//! The sequence container and its basic operations.
//!
//! Storage is a persistent vector with structural sharing, so cloning is
//! O(1) and a clone never observes later mutations of the original.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Range;

use ean_foundation::{Error, ErrorContext, Result, index};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A resizable, index-addressable, insertion-ordered container.
///
/// Indexed reads and writes accept negative positions counted from the end
/// (`-1` is the last element). Out-of-range reads return `None` and
/// out-of-range writes and removals do nothing.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> Sequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends an element at the end.
    pub fn push(&mut self, elem: T) {
        self.0.push_back(elem);
    }

    /// Inserts `elem` so that it ends up at `index`, shifting later elements
    /// right. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index > len()`; the sequence is left
    /// unchanged.
    pub fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        let length = self.len();
        if index > length {
            return Err(Error::index_out_of_bounds(index, length).with_context(
                ErrorContext::new()
                    .with_operation("insert")
                    .with_note(format!("valid positions are 0..={length}")),
            ));
        }
        self.0.insert(index, elem);
        Ok(())
    }

    /// Inserts an element as the new first element.
    pub fn insert_front(&mut self, elem: T) {
        self.0.push_front(elem);
    }

    /// Removes and returns the element at `index`.
    ///
    /// Does nothing and returns `None` when `index` is outside
    /// `[-len, len)`.
    pub fn remove(&mut self, index: isize) -> Option<T> {
        let i = index::normalize(index, self.len())?;
        Some(self.0.remove(i))
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Gets an element by index, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: isize) -> Option<&T> {
        self.0.get(index::normalize(index, self.len())?)
    }

    /// Replaces the element at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: isize, elem: T) {
        if let Some(i) = index::normalize(index, self.len()) {
            self.0.set(i, elem);
        }
    }

    /// Returns the valid indices, `0..len()`.
    ///
    /// The range is computed from the current length and does not borrow
    /// the sequence.
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }

    /// Copies the elements into a `Vec`, in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Returns true if some element equals `elem`.
    #[must_use]
    pub fn contains(&self, elem: &T) -> bool {
        self.0.iter().any(|e| e == elem)
    }

    /// Returns the index of the first element equal to `elem`.
    #[must_use]
    pub fn index_of(&self, elem: &T) -> Option<usize> {
        self.0.iter().position(|e| e == elem)
    }
}

impl<T: Clone> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Sequence<T> {}

impl<T: Clone + Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Clone> From<Vec<T>> for Sequence<T> {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

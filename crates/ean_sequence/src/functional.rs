//! Higher-order queries and transformations.
//!
//! None of these mutate the receiver. Callbacks run synchronously, once per
//! element they need to inspect, in a deterministic order.

use std::fmt;

use ean_foundation::{Error, Number, Numeric, Result};

use crate::Sequence;

impl<T: Clone> Sequence<T> {
    /// Calls `action` on every element in order and returns the receiver.
    pub fn for_each(&self, action: impl FnMut(&T)) -> &Self {
        self.iter().for_each(action);
        self
    }

    /// Returns the elements that satisfy `predicate`, in order.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// Returns `selector(e)` for every element, in order.
    #[must_use]
    pub fn map<U: Clone>(&self, selector: impl FnMut(&T) -> U) -> Sequence<U> {
        self.iter().map(selector).collect()
    }

    /// Left-to-right accumulation starting from `initial`.
    pub fn fold<A>(&self, initial: A, combine: impl FnMut(A, &T) -> A) -> A {
        self.iter().fold(initial, combine)
    }

    /// Like [`fold`](Self::fold), starting from the first element.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if there are no elements.
    pub fn reduce(&self, combine: impl FnMut(T, &T) -> T) -> Result<T> {
        let mut iter = self.iter();
        let first = iter
            .next()
            .cloned()
            .ok_or_else(|| Error::empty_sequence("reduce"))?;
        Ok(iter.fold(first, combine))
    }

    /// Sums `selector(e)` over all elements. An empty sequence sums to
    /// `Int(0)`.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for the first selected value that is not a
    /// number.
    pub fn sum_by<N>(&self, mut selector: impl FnMut(&T) -> N) -> Result<Number>
    where
        N: Numeric + fmt::Debug,
    {
        self.iter()
            .enumerate()
            .try_fold(Number::ZERO, |total, (index, elem)| {
                let selected = selector(elem);
                selected
                    .to_number()
                    .map(|n| total + n)
                    .ok_or_else(|| Error::not_numeric(index, format!("{selected:?}")))
            })
    }

    /// Averages `selector(e)` over all elements; `0.0` when empty.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for the first selected value that is not a
    /// number.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_by<N>(&self, selector: impl FnMut(&T) -> N) -> Result<f64>
    where
        N: Numeric + fmt::Debug,
    {
        if self.is_empty() {
            return Ok(0.0);
        }
        let total = self.sum_by(selector)?;
        Ok(total.as_f64() / self.len() as f64)
    }

    /// First element satisfying `predicate`, scanning forward.
    #[must_use]
    pub fn find_first(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().find(|e| predicate(e))
    }

    /// Last element satisfying `predicate`, scanning backward.
    #[must_use]
    pub fn find_last(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().rev().find(|e| predicate(e))
    }

    /// Index of the first element satisfying `predicate`.
    #[must_use]
    pub fn find_first_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Index of the last element satisfying `predicate`.
    ///
    /// Visits every element, keeping the latest match.
    #[must_use]
    pub fn find_last_index(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut found = None;
        for (index, elem) in self.iter().enumerate() {
            if predicate(elem) {
                found = Some(index);
            }
        }
        found
    }

    /// Largest element under `less_than`; ties keep the earliest.
    #[must_use]
    pub fn max_by_less(&self, less_than: impl Fn(&T, &T) -> bool) -> Option<&T> {
        let mut iter = self.iter();
        let mut best = iter.next()?;
        for elem in iter {
            if less_than(best, elem) {
                best = elem;
            }
        }
        Some(best)
    }

    /// Smallest element under `less_than`; ties keep the earliest.
    #[must_use]
    pub fn min_by_less(&self, less_than: impl Fn(&T, &T) -> bool) -> Option<&T> {
        let mut iter = self.iter();
        let mut best = iter.next()?;
        for elem in iter {
            if less_than(elem, best) {
                best = elem;
            }
        }
        Some(best)
    }

    /// Number of elements satisfying `predicate`.
    #[must_use]
    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.iter().filter(|e| predicate(e)).count()
    }

    /// Number of elements; the predicate-free form of [`count`](Self::count).
    #[must_use]
    pub fn count_all(&self) -> usize {
        self.len()
    }

    /// Percentage (0 to 100) of elements satisfying `predicate`; `0.0` when
    /// empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, predicate: impl FnMut(&T) -> bool) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        100.0 * self.count(predicate) as f64 / self.len() as f64
    }

    /// The predicate-free form of [`percentage`](Self::percentage).
    ///
    /// Always `100.0`, including for an empty sequence.
    #[must_use]
    pub fn percentage_all(&self) -> f64 {
        100.0
    }

    /// Returns a new sequence sorted ascending by `less_than`.
    ///
    /// Insertion sort: each element is placed after the last element it is
    /// not strictly less than. The sort is stable, and a comparator that is
    /// not a total order (NaN, mixed kinds) only affects the resulting order.
    #[must_use]
    pub fn sorted_by_less(&self, less_than: impl Fn(&T, &T) -> bool) -> Self {
        let mut items: Vec<T> = Vec::with_capacity(self.len());
        log::trace!("sorting {} elements", self.len());
        for elem in self.iter() {
            let mut position = items.len();
            while position > 0 && less_than(elem, &items[position - 1]) {
                position -= 1;
            }
            items.insert(position, elem.clone());
        }
        items.into_iter().collect()
    }
}

impl<T: Clone + PartialOrd> Sequence<T> {
    /// Largest element under `<`.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.max_by_less(|a, b| a < b)
    }

    /// Smallest element under `<`.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.min_by_less(|a, b| a < b)
    }

    /// Returns a new sequence sorted ascending under `<`.
    #[must_use]
    pub fn sorted(&self) -> Self {
        self.sorted_by_less(|a, b| a < b)
    }
}

impl<T: Clone + Numeric + fmt::Debug> Sequence<T> {
    /// Sums the elements themselves.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for the first element that is not a number.
    pub fn sum(&self) -> Result<Number> {
        self.sum_by(|e| e.clone())
    }

    /// Averages the elements themselves; `0.0` when empty.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for the first element that is not a number.
    pub fn average(&self) -> Result<f64> {
        self.average_by(|e| e.clone())
    }
}

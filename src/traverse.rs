//! Index-aware traversal primitives over ordered sequences.
//!
//! This module provides the [`Traverse`] trait, the foundation every other
//! utility in the crate is built on. Each callback receives the current
//! element, its zero-based index, and the whole sequence, so callbacks can
//! look at neighbours without capturing the sequence separately.
//!
//! # Laws
//!
//! ## Length preservation
//!
//! ```text
//! sequence.map_indexed(f).len() == sequence.len()
//! ```
//!
//! ## Stable filtering
//!
//! `filter_indexed` returns a subsequence of the input: every kept element
//! satisfies the predicate and relative order is unchanged.
//!
//! ## Fold consistency
//!
//! ```text
//! sequence.reduce_indexed(f, Some(init)) == Ok(sequence.fold_indexed(init, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqkit::traverse::Traverse;
//!
//! let numbers = vec![1, 2, 3];
//!
//! let tripled = numbers.map_indexed(|element, _, _| element * 3);
//! assert_eq!(tripled, vec![3, 6, 9]);
//!
//! let large = numbers.filter_indexed(|element, _, _| *element > 1);
//! assert_eq!(large, vec![2, 3]);
//!
//! let sum = numbers.fold_indexed(0, |accumulator, element, _, _| accumulator + element);
//! assert_eq!(sum, 6);
//! ```

use std::convert::Infallible;

use crate::error::{Result, SequenceError};

/// Order-preserving traversal over a sequence.
///
/// Implemented for slices, and therefore usable on `Vec<T>` through
/// auto-deref. All non-mutating operations leave the input untouched and
/// return freshly allocated results.
///
/// # Required Methods
///
/// - `try_fold_indexed`: left-to-right fold that stops at the first error
/// - `try_find_indexed`: first element matching a fallible predicate
/// - `for_each_mut_indexed`: in-place element-wise update
/// - `bubble_sort_by_key`: in-place stable sort by a derived key
///
/// # Provided Methods
///
/// `find_indexed` is expressed through `try_find_indexed`; `fold_indexed`,
/// `reduce_indexed`, `map_indexed`, `filter_indexed` and `flat_map_indexed`
/// are expressed through `try_fold_indexed`.
pub trait Traverse {
    /// The element type of the sequence.
    type Element;

    /// Folds left to right, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`; later elements are not
    /// visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::traverse::Traverse;
    ///
    /// let values = vec![1, 2, 3];
    /// let checked: Result<i32, String> = values.try_fold_indexed(0, |sum, element, index, _| {
    ///     if *element < 3 { Ok(sum + element) } else { Err(format!("too large at {index}")) }
    /// });
    /// assert_eq!(checked, Err("too large at 2".to_string()));
    /// ```
    fn try_fold_indexed<A, E, F>(&self, initial: A, function: F) -> std::result::Result<A, E>
    where
        F: FnMut(A, &Self::Element, usize, &[Self::Element]) -> std::result::Result<A, E>;

    /// Returns the first element, with its index, for which `predicate`
    /// returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_find_indexed<E, P>(
        &self,
        predicate: P,
    ) -> std::result::Result<Option<(usize, &Self::Element)>, E>
    where
        P: FnMut(&Self::Element, usize, &[Self::Element]) -> std::result::Result<bool, E>;

    /// Visits every element in index-ascending order with write access to
    /// its slot.
    ///
    /// The callback may replace the element at the current index; the
    /// sequence's length cannot change. Nothing is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::traverse::Traverse;
    ///
    /// let mut values = vec![1, 2, 3];
    /// values.for_each_mut_indexed(|element, _| *element += 2);
    /// assert_eq!(values, vec![3, 4, 5]);
    /// ```
    fn for_each_mut_indexed<F>(&mut self, function: F)
    where
        F: FnMut(&mut Self::Element, usize);

    /// Reorders the sequence in place, ascending by `key`, using pairwise
    /// adjacent swaps.
    ///
    /// The full double loop always runs (there is no early exit when a pass
    /// makes no swaps), so the cost is O(n²) comparisons for every input.
    /// Only strictly greater keys are swapped, so equal keys keep their
    /// relative order and an already-sorted input performs zero swaps.
    /// Keys that do not compare (such as `NaN`) are never swapped.
    ///
    /// Returns the number of swaps performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::traverse::Traverse;
    ///
    /// let mut ages = vec![29, 20, 36];
    /// let swaps = ages.bubble_sort_by_key(|age| *age);
    /// assert_eq!(ages, vec![20, 29, 36]);
    /// assert_eq!(swaps, 1);
    ///
    /// assert_eq!(ages.bubble_sort_by_key(|age| *age), 0);
    /// ```
    fn bubble_sort_by_key<K, F>(&mut self, key: F) -> usize
    where
        K: PartialOrd,
        F: FnMut(&Self::Element) -> K;

    /// Folds left to right from `initial`.
    ///
    /// An empty sequence yields `initial` unchanged.
    fn fold_indexed<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &Self::Element, usize, &[Self::Element]) -> A,
    {
        let folded: std::result::Result<A, Infallible> = self
            .try_fold_indexed(initial, |accumulator, element, index, sequence| {
                Ok(function(accumulator, element, index, sequence))
            });
        match folded {
            Ok(accumulator) => accumulator,
            Err(never) => match never {},
        }
    }

    /// Reduces the sequence to a single element.
    ///
    /// With `Some(initial)` this is a fold from `initial`. With `None`, the
    /// first element seeds the accumulator and folding starts at index 1.
    /// Whether an initial value was supplied is decided by the `Option`
    /// alone, so an accumulator of `0` or `""` is an ordinary value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty and
    /// no initial value was given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::traverse::Traverse;
    ///
    /// let add = |accumulator: i32, element: &i32, _: usize, _: &[i32]| accumulator + element;
    ///
    /// assert_eq!(vec![1, 2, 3].reduce_indexed(add, Some(0)), Ok(6));
    /// assert_eq!(Vec::<i32>::new().reduce_indexed(add, Some(0)), Ok(0));
    /// assert!(Vec::<i32>::new().reduce_indexed(add, None).is_err());
    ///
    /// // A zero accumulator is not mistaken for "no value yet".
    /// let multiply = |accumulator: i32, element: &i32, _: usize, _: &[i32]| accumulator * element;
    /// assert_eq!(vec![0, 3].reduce_indexed(multiply, None), Ok(0));
    /// ```
    fn reduce_indexed<F>(
        &self,
        mut function: F,
        initial: Option<Self::Element>,
    ) -> Result<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(Self::Element, &Self::Element, usize, &[Self::Element]) -> Self::Element,
    {
        let seeded = initial.is_some();
        let outcome = self.try_fold_indexed(initial, |accumulator, element, index, sequence| {
            let next = accumulator.map_or_else(
                || {
                    debug_assert!(!seeded && index == 0);
                    element.clone()
                },
                |accumulator| function(accumulator, element, index, sequence),
            );
            Ok::<_, Infallible>(Some(next))
        });
        match outcome {
            Ok(Some(accumulator)) => Ok(accumulator),
            Ok(None) => Err(SequenceError::EmptySequence),
            Err(never) => match never {},
        }
    }

    /// Maps every element, producing a sequence of the same length.
    ///
    /// Element `i` of the result is `function(&sequence[i], i, sequence)`.
    fn map_indexed<R, F>(&self, mut function: F) -> Vec<R>
    where
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> R,
    {
        self.fold_indexed(Vec::new(), |mut mapped, element, index, sequence| {
            mapped.push(function(element, index, sequence));
            mapped
        })
    }

    /// Keeps, in original order, exactly the elements for which `predicate`
    /// returns `true`.
    fn filter_indexed<P>(&self, mut predicate: P) -> Vec<Self::Element>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element, usize, &[Self::Element]) -> bool,
    {
        self.fold_indexed(Vec::new(), |mut kept, element, index, sequence| {
            if predicate(element, index, sequence) {
                kept.push(element.clone());
            }
            kept
        })
    }

    /// Maps every element to zero or more results and concatenates them in
    /// element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::traverse::Traverse;
    ///
    /// let counts = vec![1, 0, 2];
    /// let expanded = counts.flat_map_indexed(|count, index, _| vec![index; *count]);
    /// assert_eq!(expanded, vec![0, 2, 2]);
    /// ```
    fn flat_map_indexed<R, I, F>(&self, mut function: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> I,
    {
        self.fold_indexed(Vec::new(), |mut flattened, element, index, sequence| {
            flattened.extend(function(element, index, sequence));
            flattened
        })
    }

    /// Returns the first element, with its index, satisfying `predicate`.
    fn find_indexed<P>(&self, mut predicate: P) -> Option<(usize, &Self::Element)>
    where
        P: FnMut(&Self::Element, usize, &[Self::Element]) -> bool,
    {
        let found: std::result::Result<_, Infallible> = self
            .try_find_indexed(|element, index, sequence| Ok(predicate(element, index, sequence)));
        match found {
            Ok(found) => found,
            Err(never) => match never {},
        }
    }
}

// =============================================================================
// [T] Implementation
// =============================================================================

impl<T> Traverse for [T] {
    type Element = T;

    fn try_fold_indexed<A, E, F>(&self, initial: A, mut function: F) -> std::result::Result<A, E>
    where
        F: FnMut(A, &T, usize, &[T]) -> std::result::Result<A, E>,
    {
        let mut accumulator = initial;
        for (index, element) in self.iter().enumerate() {
            accumulator = function(accumulator, element, index, self)?;
        }
        Ok(accumulator)
    }

    fn try_find_indexed<E, P>(
        &self,
        mut predicate: P,
    ) -> std::result::Result<Option<(usize, &T)>, E>
    where
        P: FnMut(&T, usize, &[T]) -> std::result::Result<bool, E>,
    {
        for (index, element) in self.iter().enumerate() {
            if predicate(element, index, self)? {
                return Ok(Some((index, element)));
            }
        }
        Ok(None)
    }

    fn for_each_mut_indexed<F>(&mut self, mut function: F)
    where
        F: FnMut(&mut T, usize),
    {
        for (index, element) in self.iter_mut().enumerate() {
            function(element, index);
        }
    }

    fn bubble_sort_by_key<K, F>(&mut self, mut key: F) -> usize
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let length = self.len();
        let mut swaps = 0;
        for pass in 0..length {
            for index in 0..length.saturating_sub(pass + 1) {
                if key(&self[index]) > key(&self[index + 1]) {
                    self.swap(index, index + 1);
                    swaps += 1;
                }
            }
        }
        tracing::trace!(length, swaps, "bubble sort finished");
        swaps
    }
}

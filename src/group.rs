//! Partitioning a sequence into keyed buckets.
//!
//! [`group_by`] walks a sequence once, derives a [`Key`] for each element,
//! and appends the element to that key's bucket. Buckets appear in the order
//! their key was first seen, and each bucket keeps input order.
//!
//! [`count_by`] and [`most_frequent`] use the same walk to tally keys instead
//! of collecting elements.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::group::group_by;
//! use seqkit::record;
//! use seqkit::record::{Key, field};
//!
//! let people = vec![
//!     record! { "name" => "A", "city" => "X" },
//!     record! { "name" => "B", "city" => "Y" },
//!     record! { "name" => "C", "city" => "X" },
//! ];
//!
//! let groups = group_by(&people, field("city")).unwrap();
//! assert_eq!(groups.keys().collect::<Vec<_>>(), [&Key::from("X"), &Key::from("Y")]);
//! assert_eq!(groups.get(&Key::from("X")).map(<[_]>::len), Some(2));
//! ```

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{Result, SequenceError};
use crate::record::Key;
use crate::traverse::Traverse;

/// Buckets produced by [`group_by`], in first-seen key order.
///
/// Every input element sits in exactly one bucket and no bucket is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<T> {
    buckets: IndexMap<Key, Vec<T>>,
}

impl<T> Groups<T> {
    /// Returns the bucket for `key`, if any element produced it.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&[T]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Iterates keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.buckets.keys()
    }

    /// Iterates `(key, bucket)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &[T])> {
        self.buckets
            .iter()
            .map(|(key, bucket)| (key, bucket.as_slice()))
    }

    /// Returns the number of buckets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` when there are no buckets (the input was empty).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the number of elements across all buckets.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Consumes the groups, returning the underlying ordered map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<Key, Vec<T>> {
        self.buckets
    }
}

impl<T> IntoIterator for Groups<T> {
    type Item = (Key, Vec<T>);
    type IntoIter = indexmap::map::IntoIter<Key, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Groups `sequence` into buckets keyed by `key_function`.
///
/// # Errors
///
/// Returns the first error produced by `key_function`, such as
/// [`SequenceError::MissingField`](crate::SequenceError::MissingField) from
/// [`field`](crate::record::field).
///
/// # Examples
///
/// ```rust
/// use seqkit::group::group_by;
/// use seqkit::record::Key;
///
/// let words = vec!["apple", "avocado", "banana"];
/// let groups = group_by(&words, |word| Ok(Key::from(&word[..1]))).unwrap();
///
/// assert_eq!(groups.get(&Key::from("a")), Some(&["apple", "avocado"][..]));
/// assert_eq!(groups.get(&Key::from("b")), Some(&["banana"][..]));
/// assert_eq!(groups.get(&Key::from("c")), None);
/// ```
pub fn group_by<T, F>(sequence: &[T], mut key_function: F) -> Result<Groups<T>>
where
    T: Clone,
    F: FnMut(&T) -> Result<Key>,
{
    let buckets = sequence.try_fold_indexed(
        IndexMap::new(),
        |mut buckets: IndexMap<Key, Vec<T>>, element, index, _| {
            match buckets.entry(key_function(element)?) {
                Entry::Occupied(mut bucket) => bucket.get_mut().push(element.clone()),
                Entry::Vacant(slot) => {
                    tracing::trace!(key = %slot.key(), index, "new group bucket");
                    slot.insert(vec![element.clone()]);
                }
            }
            Ok::<_, SequenceError>(buckets)
        },
    )?;
    Ok(Groups { buckets })
}

/// Counts how many elements produce each key, in first-seen key order.
///
/// # Errors
///
/// Returns the first error produced by `key_function`.
///
/// # Examples
///
/// ```rust
/// use seqkit::group::count_by;
/// use seqkit::record::Key;
///
/// let counts = count_by(&[1, 2, 3, 1, 2, 4, 5, 2], |n| Ok(Key::from(*n))).unwrap();
/// assert_eq!(counts.get(&Key::from(2)), Some(&3));
/// assert_eq!(counts.keys().next(), Some(&Key::from(1)));
/// ```
pub fn count_by<T, F>(sequence: &[T], mut key_function: F) -> Result<IndexMap<Key, usize>>
where
    F: FnMut(&T) -> Result<Key>,
{
    sequence.try_fold_indexed(IndexMap::new(), |mut counts, element, _, _| {
        *counts.entry(key_function(element)?).or_insert(0) += 1;
        Ok::<_, SequenceError>(counts)
    })
}

/// Returns the key produced most often, with its count.
///
/// On a tie the key that reached the winning count first wins. An empty
/// sequence yields `None`.
///
/// # Errors
///
/// Returns the first error produced by `key_function`.
///
/// # Examples
///
/// ```rust
/// use seqkit::group::most_frequent;
/// use seqkit::record::Key;
///
/// let winner = most_frequent(&[1, 2, 3, 1, 2, 4, 5, 2], |n| Ok(Key::from(*n))).unwrap();
/// assert_eq!(winner, Some((Key::from(2), 3)));
/// ```
pub fn most_frequent<T, F>(sequence: &[T], mut key_function: F) -> Result<Option<(Key, usize)>>
where
    F: FnMut(&T) -> Result<Key>,
{
    let (_, leader) = sequence.try_fold_indexed(
        (IndexMap::<Key, usize>::new(), None::<(Key, usize)>),
        |(mut counts, leader), element, _, _| {
            let key = key_function(element)?;
            let count = counts.entry(key.clone()).or_insert(0);
            *count += 1;
            let count = *count;
            let leader = match leader {
                Some((_, best)) if count > best => Some((key, count)),
                None => Some((key, count)),
                unchanged => unchanged,
            };
            Ok::<_, SequenceError>((counts, leader))
        },
    )?;
    Ok(leader)
}

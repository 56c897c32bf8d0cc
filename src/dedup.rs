//! Removing elements whose key was already seen.

#[cfg(not(feature = "fxhash"))]
use std::collections::HashSet;

#[cfg(feature = "fxhash")]
use rustc_hash::FxHashSet as HashSet;

use crate::error::{Result, SequenceError};
use crate::record::Key;
use crate::traverse::Traverse;

/// Keeps the first element for each key and drops later duplicates.
///
/// The result is a subsequence of `sequence` in original order, and applying
/// `dedup_by` twice with the same key function gives the same result as
/// applying it once.
///
/// # Errors
///
/// Returns the first error produced by `key_function`.
///
/// # Examples
///
/// ```rust
/// use seqkit::dedup::dedup_by;
/// use seqkit::record;
/// use seqkit::record::field;
///
/// let people = vec![
///     record! { "name" => "rak" },
///     record! { "name" => "raj" },
///     record! { "name" => "rak" },
/// ];
///
/// let unique = dedup_by(&people, field("name")).unwrap();
/// assert_eq!(unique, vec![record! { "name" => "rak" }, record! { "name" => "raj" }]);
/// ```
pub fn dedup_by<T, F>(sequence: &[T], mut key_function: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T) -> Result<Key>,
{
    let (_, kept) = sequence.try_fold_indexed(
        (HashSet::default(), Vec::new()),
        |(mut seen, mut kept): (HashSet<Key>, Vec<T>), element, index, _| {
            let key = key_function(element)?;
            if seen.contains(&key) {
                tracing::trace!(%key, index, "duplicate dropped");
            } else {
                seen.insert(key);
                kept.push(element.clone());
            }
            Ok::<_, SequenceError>((seen, kept))
        },
    )?;
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let pairs = [(1, 'a'), (2, 'b'), (1, 'c'), (3, 'd'), (2, 'e')];
        let unique = dedup_by(&pairs, |pair| Ok(Key::from(pair.0))).unwrap();
        assert_eq!(unique, vec![(1, 'a'), (2, 'b'), (3, 'd')]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(dedup_by(&empty, |n| Ok(Key::from(*n))), Ok(Vec::new()));
    }

    #[test]
    fn test_error_stops_scan() {
        let values = [1, 2];
        let result = dedup_by(&values, |_| Err(SequenceError::missing_field("k")));
        assert!(result.unwrap_err().is_missing_field());
    }
}

//! Inner-joining two record sequences on a shared key field.

use crate::error::{Result, SequenceError};
use crate::record::Record;
use crate::traverse::Traverse;

/// Joins `left` and `right` on `key_field`.
///
/// For each record in `left`, in order, the first record in `right` whose
/// `key_field` equals the left record's is laid over it with
/// [`Record::overlay`]: the right record's fields win on name collisions,
/// except `key_field` which keeps the left record's value, and fields only on
/// the right are appended. Left records without a match are dropped, so the
/// result is never longer than `left`.
///
/// Keys compare as [`Key`](crate::record::Key)s, so the number `1` and the
/// text `"1"` do not match.
///
/// # Errors
///
/// Returns [`SequenceError::MissingField`] when a processed record (every
/// left record, and each right record scanned while looking for a match)
/// lacks `key_field`, and [`SequenceError::TypeMismatch`] when the field
/// holds a record or sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::merge::merge_on;
/// use seqkit::record;
///
/// let people = vec![
///     record! { "id" => 1, "name" => "Rak" },
///     record! { "id" => 2, "name" => "Raj" },
/// ];
/// let cities = vec![
///     record! { "id" => 1, "city" => "Delhi" },
///     record! { "id" => 2, "city" => "Mumbai" },
/// ];
///
/// let merged = merge_on(&people, &cities, "id").unwrap();
/// assert_eq!(
///     merged,
///     vec![
///         record! { "id" => 1, "name" => "Rak", "city" => "Delhi" },
///         record! { "id" => 2, "name" => "Raj", "city" => "Mumbai" },
///     ]
/// );
/// ```
pub fn merge_on(left: &[Record], right: &[Record], key_field: &str) -> Result<Vec<Record>> {
    left.try_fold_indexed(
        Vec::with_capacity(left.len()),
        |mut merged, left_record, index, _| {
            let key = left_record.key(key_field)?;
            let matched = right.try_find_indexed(|right_record, _, _| {
                Ok::<_, SequenceError>(right_record.key(key_field)? == key)
            })?;
            if let Some((_, right_record)) = matched {
                let mut combined = left_record.overlay(right_record);
                combined.insert(key_field, left_record.require(key_field)?.clone());
                merged.push(combined);
            } else {
                tracing::trace!(%key, index, "left record has no match, dropped");
            }
            Ok::<_, SequenceError>(merged)
        },
    )
}

//! One-level flat-map over nested record fields.
//!
//! Both functions walk parents in order and, for each parent, the sequence
//! held in `nested_field` in order, emitting one output record per child.
//! A parent whose nested sequence is empty contributes nothing.

use crate::error::{Result, SequenceError};
use crate::record::{Record, Value};
use crate::traverse::Traverse;

/// Expands each parent's nested sequence of values into combined records.
///
/// `emit` receives the parent and one child value and builds the output
/// record. An error from `emit` aborts the whole call.
///
/// # Errors
///
/// Returns [`SequenceError::MissingField`](crate::SequenceError::MissingField)
/// when a parent lacks `nested_field`,
/// [`SequenceError::TypeMismatch`](crate::SequenceError::TypeMismatch) when
/// the field is not a sequence, or the first error produced by `emit`.
///
/// # Examples
///
/// ```rust
/// use seqkit::flatten::flatten_values_on;
/// use seqkit::record;
/// use seqkit::record::Record;
///
/// let users = vec![
///     record! { "name" => "Alice", "pets" => vec!["dog", "cat"] },
///     record! { "name" => "Bob", "pets" => vec!["fish"] },
/// ];
///
/// let owners = flatten_values_on(&users, "pets", |user, pet| {
///     Ok(Record::new()
///         .with("owner", user.require("name")?.clone())
///         .with("pet", pet.clone()))
/// })
/// .unwrap();
///
/// assert_eq!(
///     owners,
///     vec![
///         record! { "owner" => "Alice", "pet" => "dog" },
///         record! { "owner" => "Alice", "pet" => "cat" },
///         record! { "owner" => "Bob", "pet" => "fish" },
///     ]
/// );
/// ```
pub fn flatten_values_on<F>(
    sequence: &[Record],
    nested_field: &str,
    mut emit: F,
) -> Result<Vec<Record>>
where
    F: FnMut(&Record, &Value) -> Result<Record>,
{
    sequence.try_fold_indexed(Vec::new(), |mut flattened, parent, _, _| {
        let children = parent.require(nested_field)?.require_sequence(nested_field)?;
        flattened.reserve(children.len());
        for child in children {
            flattened.push(emit(parent, child)?);
        }
        Ok::<_, SequenceError>(flattened)
    })
}

/// Expands each parent's nested sequence of records into combined records.
///
/// This is [`flatten_values_on`] for the common case where every child is
/// itself a record.
///
/// # Errors
///
/// As [`flatten_values_on`], plus
/// [`SequenceError::TypeMismatch`](crate::SequenceError::TypeMismatch) when a
/// child is not a record.
///
/// # Examples
///
/// ```rust
/// use seqkit::flatten::flatten_on;
/// use seqkit::record;
/// use seqkit::record::Record;
///
/// let people = vec![
///     record! {
///         "name" => "A",
///         "skills" => vec![record! { "name" => "JS" }, record! { "name" => "HTML" }],
///     },
///     record! { "name" => "B", "skills" => vec![record! { "name" => "CSS" }] },
/// ];
///
/// let skills = flatten_on(&people, "skills", |person, skill| {
///     Ok(Record::new()
///         .with("name", person.require("name")?.clone())
///         .with("skill", skill.require("name")?.clone()))
/// })
/// .unwrap();
///
/// assert_eq!(skills.len(), 3);
/// assert_eq!(skills[2], record! { "name" => "B", "skill" => "CSS" });
/// ```
pub fn flatten_on<F>(sequence: &[Record], nested_field: &str, mut emit: F) -> Result<Vec<Record>>
where
    F: FnMut(&Record, &Record) -> Result<Record>,
{
    flatten_values_on(sequence, nested_field, |parent, child| {
        emit(parent, child.require_record(nested_field)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::record::ValueKind;

    fn copy_parent(parent: &Record, _: &Record) -> Result<Record> {
        Ok(parent.clone())
    }

    #[test]
    fn test_empty_nested_sequence_contributes_nothing() {
        let parents = [
            record! { "id" => 1, "items" => Vec::<Record>::new() },
            record! { "id" => 2, "items" => vec![record! {}] },
        ];
        let flattened = flatten_on(&parents, "items", copy_parent).unwrap();
        assert_eq!(flattened.len(), 1);
        assert_eq!(flattened[0].get("id"), Some(&Value::from(2)));
    }

    #[test]
    fn test_missing_nested_field() {
        let parents = [record! { "id" => 1 }];
        assert_eq!(
            flatten_on(&parents, "items", copy_parent),
            Err(SequenceError::missing_field("items"))
        );
    }

    #[test]
    fn test_nested_field_not_a_sequence() {
        let parents = [record! { "items" => "oops" }];
        assert_eq!(
            flatten_on(&parents, "items", copy_parent),
            Err(SequenceError::type_mismatch("items", "sequence", ValueKind::Text))
        );
    }

    #[test]
    fn test_scalar_child_rejected_by_record_flatten() {
        let parents = [record! { "items" => vec![1] }];
        assert_eq!(
            flatten_on(&parents, "items", copy_parent),
            Err(SequenceError::type_mismatch("items", "record", ValueKind::Number))
        );
    }
}

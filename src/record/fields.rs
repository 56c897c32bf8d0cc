//! Insertion-ordered named-field records.

use std::fmt;

use indexmap::IndexMap;

use super::{Key, Value};
use crate::error::{Result, SequenceError};

/// A mapping from field name to [`Value`] that remembers insertion order.
///
/// Records have no fixed schema. Fields accessed by name through
/// [`Record::require`] or [`Record::key`] must exist, otherwise the call fails
/// with [`SequenceError::MissingField`].
///
/// Equality compares field sets and values and ignores field order; use
/// [`Record::names`] to observe order.
///
/// # Examples
///
/// ```rust
/// use seqkit::record::{Record, Value};
///
/// let record = Record::new().with("id", 1).with("name", "Rak");
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("name"), Some(&Value::from("Rak")));
/// assert!(record.require("city").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the record with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value.
    ///
    /// An existing field keeps its position; a new field is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Returns the value of `name`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns a mutable reference to the value of `name`, if present.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Returns the value of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MissingField`] when the field is absent.
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| SequenceError::missing_field(name))
    }

    /// Returns the value of `name` as a comparable [`Key`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MissingField`] when the field is absent and
    /// [`SequenceError::TypeMismatch`] when it holds a record or sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record;
    /// use seqkit::record::Key;
    ///
    /// let person = record! { "id" => 1, "tags" => vec!["a"] };
    /// assert_eq!(person.key("id").unwrap(), Key::from(1));
    /// assert!(person.key("tags").unwrap_err().is_type_mismatch());
    /// ```
    pub fn key(&self, name: &str) -> Result<Key> {
        Key::from_value(self.require(name)?, name)
    }

    /// Returns `true` if the record has a field called `name`.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Removes `name`, keeping the order of the remaining fields.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Returns the number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates the underlying `(name, value)` entries in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    /// Iterates `(name, value)` pairs mutably in insertion order.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.fields
            .iter_mut()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns a copy of this record with `other`'s fields laid over it.
    ///
    /// Fields present in both take `other`'s value but keep this record's
    /// position. Fields only in `other` are appended in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record;
    ///
    /// let base = record! { "id" => 1, "name" => "Rak" };
    /// let extra = record! { "id" => 1, "city" => "Delhi", "name" => "Rakesh" };
    /// let merged = base.overlay(&extra);
    ///
    /// assert_eq!(merged.names().collect::<Vec<_>>(), ["id", "name", "city"]);
    /// assert_eq!(merged.get("name").and_then(|v| v.as_text()), Some("Rakesh"));
    /// ```
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        let mut merged = Self::with_capacity(self.len() + other.len());
        merged.fields.extend(self.fields.clone());
        for (name, value) in &other.fields {
            merged.fields.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Splits the fields into those matching `predicate` and the rest.
    ///
    /// Both halves keep the original field order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record;
    ///
    /// let person = record! { "name" => "rak", "age" => 20, "add" => "hyd" };
    /// let (numbers, rest) = person.partition(|_, value| value.as_number().is_some());
    ///
    /// assert_eq!(numbers, record! { "age" => 20 });
    /// assert_eq!(rest.names().collect::<Vec<_>>(), ["name", "add"]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&str, &Value) -> bool,
    {
        let mut matched = Self::new();
        let mut rest = Self::new();
        for (name, value) in &self.fields {
            let target = if predicate(name, value) {
                &mut matched
            } else {
                &mut rest
            };
            target.fields.insert(name.clone(), value.clone());
        }
        (matched, rest)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("{}");
        }
        formatter.write_str("{ ")?;
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{name}: {value}")?;
        }
        formatter.write_str(" }")
    }
}

impl<N, V> FromIterator<(N, V)> for Record
where
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

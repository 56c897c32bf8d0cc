//! Comparable keys derived from records.
//!
//! Grouping, merging and deduplication compare records by a derived key.
//! A [`Key`] is the scalar subset of [`Value`] with total equality, ordering
//! and hashing, so it can index buckets and seen-sets.
//!
//! Key functions are plain closures `FnMut(&T) -> Result<Key>`. For records,
//! [`field`] builds the common "key by field name" function.

use std::fmt;

use ordered_float::OrderedFloat;

use super::{Record, Value};
use crate::error::{Result, SequenceError};

/// A hashable, totally ordered scalar key.
///
/// Numbers follow same-value-zero equality: `-0.0` equals `0.0`, and `NaN`
/// equals `NaN`. Keys of different kinds are never equal, so the number `1`
/// and the text `"1"` are distinct.
///
/// # Examples
///
/// ```rust
/// use seqkit::record::Key;
///
/// assert_eq!(Key::from(1), Key::number(1.0));
/// assert_eq!(Key::number(-0.0), Key::number(0.0));
/// assert_ne!(Key::from(1), Key::from("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    /// A boolean key.
    Bool(bool),
    /// A numeric key.
    Number(OrderedFloat<f64>),
    /// A text key.
    Text(String),
}

impl Key {
    /// Creates a numeric key, folding negative zero into positive zero.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn number(number: f64) -> Self {
        let normalized = if number == 0.0 { 0.0 } else { number };
        Self::Number(OrderedFloat(normalized))
    }

    /// Converts a scalar value into a key.
    ///
    /// `context` names the value's role (usually a field name) for the error.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] when `value` is a record or a
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record::{Key, Value};
    ///
    /// let key = Key::from_value(&Value::from("X"), "city").unwrap();
    /// assert_eq!(key, Key::from("X"));
    ///
    /// let error = Key::from_value(&Value::from(vec![1]), "city").unwrap_err();
    /// assert!(error.is_type_mismatch());
    /// ```
    pub fn from_value(value: &Value, context: &str) -> Result<Self> {
        match value {
            Value::Bool(flag) => Ok(Self::Bool(*flag)),
            Value::Number(number) => Ok(Self::number(*number)),
            Value::Text(text) => Ok(Self::Text(text.clone())),
            Value::Sequence(_) | Value::Record(_) => Err(SequenceError::type_mismatch(
                context,
                "scalar key",
                value.kind(),
            )),
        }
    }

    /// Returns the text payload, if this is a text key.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is a numeric key.
    #[inline]
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(number.0),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{}", number.0),
            Self::Text(text) => formatter.write_str(text),
        }
    }
}

impl TryFrom<&Value> for Key {
    type Error = SequenceError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value, "key")
    }
}

impl From<bool> for Key {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Key {
    fn from(number: f64) -> Self {
        Self::number(number)
    }
}

impl From<i32> for Key {
    fn from(number: i32) -> Self {
        Self::number(f64::from(number))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Key {
    fn from(number: i64) -> Self {
        Self::number(number as f64)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Returns a key function that reads `name` from each record.
///
/// The returned closure fails with [`SequenceError::MissingField`] when a
/// record lacks the field and with [`SequenceError::TypeMismatch`] when the
/// field holds a record or sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::record;
/// use seqkit::record::{Key, field};
///
/// let by_city = field("city");
/// assert_eq!(by_city(&record! { "city" => "X" }).unwrap(), Key::from("X"));
/// assert!(by_city(&record! { "name" => "A" }).unwrap_err().is_missing_field());
/// ```
#[must_use]
pub fn field(name: impl Into<String>) -> impl Fn(&Record) -> Result<Key> {
    let name = name.into();
    move |record: &Record| record.key(&name)
}

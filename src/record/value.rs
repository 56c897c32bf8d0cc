//! Tagged field values.

use std::fmt;

use super::{Key, Record};
use crate::error::{Result, SequenceError};

/// A heterogeneous field value.
///
/// Records carry no fixed schema, so every field holds one of these tagged
/// variants: a scalar (text, number, boolean), a nested [`Record`], or a
/// nested sequence of values.
///
/// # Examples
///
/// ```rust
/// use seqkit::record::{Value, ValueKind};
///
/// let value = Value::from("Delhi");
/// assert_eq!(value.kind(), ValueKind::Text);
/// assert_eq!(value.as_text(), Some("Delhi"));
/// assert!(value.is_scalar());
///
/// let nested = Value::from(vec!["dog", "cat"]);
/// assert_eq!(nested.as_sequence().map(<[Value]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar. Integers and floats share one representation.
    Number(f64),
    /// A text scalar.
    Text(String),
    /// A nested ordered sequence.
    Sequence(Vec<Value>),
    /// A nested record.
    Record(Record),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Number`]
    Number,
    /// [`Value::Text`]
    Text,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Record`]
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Record => "record",
        };
        formatter.write_str(name)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Record(_) => ValueKind::Record,
        }
    }

    /// Returns `true` for text, number and boolean values.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool(_) | Self::Number(_) | Self::Text(_))
    }

    /// Returns the text payload, if this is a text value.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is a number.
    #[inline]
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the nested record, if this is a record.
    #[inline]
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the nested elements, if this is a sequence.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested record or a [`SequenceError::TypeMismatch`] naming
    /// `context`.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a record.
    pub fn require_record(&self, context: &str) -> Result<&Record> {
        self.as_record()
            .ok_or_else(|| SequenceError::type_mismatch(context, "record", self.kind()))
    }

    /// Returns the nested elements or a [`SequenceError::TypeMismatch`] naming
    /// `context`.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a sequence.
    pub fn require_sequence(&self, context: &str) -> Result<&[Self]> {
        self.as_sequence()
            .ok_or_else(|| SequenceError::type_mismatch(context, "sequence", self.kind()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "'{text}'"),
            Self::Sequence(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Record(record) => write!(formatter, "{record}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Bool(flag) => Self::Bool(flag),
            Key::Number(number) => Self::Number(number.into_inner()),
            Key::Text(text) => Self::Text(text),
        }
    }
}

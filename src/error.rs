//! Error types for sequence and record operations.
//!
//! Every fallible operation in this crate reports a [`SequenceError`]. Errors
//! are surfaced synchronously to the immediate caller; nothing is retried or
//! recovered inside the library.

use thiserror::Error;

use crate::record::ValueKind;

/// Errors produced by traversal, grouping, merging, flattening and
/// deduplication.
///
/// # Examples
///
/// ```rust
/// use seqkit::SequenceError;
///
/// let error = SequenceError::missing_field("city");
/// assert!(error.is_missing_field());
/// assert_eq!(error.to_string(), "record has no field 'city'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A reduce without an initial value was applied to an empty sequence.
    #[error("reduce of empty sequence with no initial value")]
    EmptySequence,

    /// A record did not contain a field that an operation needed.
    #[error("record has no field '{field}'")]
    MissingField {
        /// Name of the absent field.
        field: String,
    },

    /// A value had a different kind than the operation required.
    #[error("type mismatch for '{context}': expected {expected}, found {found}")]
    TypeMismatch {
        /// The field name or role of the offending value.
        context: String,
        /// Description of what was required.
        expected: &'static str,
        /// The kind that was actually found.
        found: ValueKind,
    },
}

impl SequenceError {
    /// Creates a [`SequenceError::MissingField`] for the given field name.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a [`SequenceError::TypeMismatch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::SequenceError;
    /// use seqkit::record::ValueKind;
    ///
    /// let error = SequenceError::type_mismatch("skills", "sequence", ValueKind::Text);
    /// assert_eq!(
    ///     error.to_string(),
    ///     "type mismatch for 'skills': expected sequence, found text"
    /// );
    /// ```
    #[must_use]
    pub fn type_mismatch(
        context: impl Into<String>,
        expected: &'static str,
        found: ValueKind,
    ) -> Self {
        Self::TypeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Returns `true` for [`SequenceError::EmptySequence`].
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence)
    }

    /// Returns `true` for [`SequenceError::MissingField`].
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Returns `true` for [`SequenceError::TypeMismatch`].
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

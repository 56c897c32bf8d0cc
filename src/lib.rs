//! # seqkit
//!
//! Index-aware traversal primitives for ordered in-memory sequences, and
//! record utilities built on top of them.
//!
//! ## Overview
//!
//! - **Traverse**: `map`, `filter`, `reduce`, in-place update and in-place
//!   bubble sort, each callback seeing `(element, index, sequence)`
//! - **Record model**: heterogeneous named-field records with typed values
//!   and comparable keys
//! - **Group**: partition a sequence into buckets by a derived key
//! - **Merge**: inner-join two record sequences on a shared key field
//! - **Flatten**: expand nested one-to-many fields into flat records
//! - **Dedup**: keep the first element for each derived key
//!
//! All operations are synchronous and single-threaded. Only the explicitly
//! in-place operations mutate their input; everything else returns new
//! sequences.
//!
//! ## Feature Flags
//!
//! - `traverse`: the [`Traverse`](traverse::Traverse) trait
//! - `group`, `merge`, `flatten`, `dedup`: the derived utilities
//! - `serde`: serialization for records, values and keys
//! - `fxhash`: use `rustc-hash` for deduplication seen-sets
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//! use seqkit::record;
//!
//! let people = vec![
//!     record! { "name" => "rak", "city" => "X" },
//!     record! { "name" => "raj", "city" => "Y" },
//!     record! { "name" => "rak", "city" => "X" },
//! ];
//!
//! let unique = dedup_by(&people, field("name")).unwrap();
//! let by_city = group_by(&unique, field("city")).unwrap();
//!
//! assert_eq!(unique.len(), 2);
//! assert_eq!(by_city.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::record::{Key, Record, Value, ValueKind, field};

    #[cfg(feature = "traverse")]
    pub use crate::traverse::Traverse;

    #[cfg(feature = "group")]
    pub use crate::group::{Groups, count_by, group_by, most_frequent};

    #[cfg(feature = "merge")]
    pub use crate::merge::merge_on;

    #[cfg(feature = "flatten")]
    pub use crate::flatten::{flatten_on, flatten_values_on};

    #[cfg(feature = "dedup")]
    pub use crate::dedup::dedup_by;
}

pub mod error;
pub mod record;

#[cfg(feature = "traverse")]
pub mod traverse;

#[cfg(feature = "group")]
pub mod group;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "flatten")]
pub mod flatten;

#[cfg(feature = "dedup")]
pub mod dedup;

pub use error::{Result, SequenceError};

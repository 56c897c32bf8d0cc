//! Heterogeneous records and the values they hold.
//!
//! This module provides the typed field-lookup model the derived utilities
//! work on:
//!
//! - [`Value`]: a tagged field value (text, number, boolean, record, sequence)
//! - [`Record`]: an insertion-ordered mapping from field name to [`Value`]
//! - [`Key`]: the hashable scalar subset of [`Value`], used by key functions
//! - [`field`]: the standard "key by field name" function
//! - [`record!`](crate::record!): a literal syntax for records
//!
//! # Examples
//!
//! ```rust
//! use seqkit::record;
//! use seqkit::record::{Key, Value};
//!
//! let person = record! { "name" => "rak", "age" => 29 };
//! assert_eq!(person.get("age"), Some(&Value::from(29)));
//! assert_eq!(person.key("name").unwrap(), Key::from("rak"));
//! ```

mod fields;
mod key;
mod macros;
mod value;
mod walk;

pub use fields::Record;
pub use key::{Key, field};
pub use value::{Value, ValueKind};

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Record: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Key: Send, Sync, Eq, std::hash::Hash, Ord);

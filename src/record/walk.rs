//! Depth-first walks over nested values.
//!
//! A value tree is a scalar, a record of values, or a sequence of values.
//! The walk visits every scalar leaf in field order (records) and index order
//! (sequences), descending into a nested container before moving on to the
//! next sibling.

use super::{Record, Value};

fn walk(value: &mut Value, visitor: &mut dyn FnMut(&mut Value)) {
    match value {
        Value::Record(record) => walk_record(record, visitor),
        Value::Sequence(items) => {
            for item in items {
                walk(item, visitor);
            }
        }
        scalar => visitor(scalar),
    }
}

fn walk_record(record: &mut Record, visitor: &mut dyn FnMut(&mut Value)) {
    for (_, value) in record.fields_mut() {
        walk(value, visitor);
    }
}

fn scrub_leaf(leaf: &mut Value, targets: &[&str], replacement: &str) -> bool {
    let matched = leaf
        .as_text()
        .is_some_and(|text| targets.contains(&text));
    if matched {
        *leaf = Value::from(replacement);
    }
    matched
}

impl Value {
    /// Calls `visitor` on every scalar leaf of this value, depth first.
    ///
    /// The visitor may overwrite the leaf in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record::Value;
    ///
    /// let mut value = Value::from(vec![Value::from(1), Value::from(vec![2, 3])]);
    /// let mut seen = Vec::new();
    /// value.walk_scalars_mut(|leaf| seen.push(leaf.as_number().unwrap_or_default()));
    /// assert_eq!(seen, [1.0, 2.0, 3.0]);
    /// ```
    pub fn walk_scalars_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Self),
    {
        walk(self, &mut visitor);
    }

    /// Replaces every text leaf equal to one of `targets` with `replacement`.
    ///
    /// Returns the number of leaves replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record::Value;
    ///
    /// let mut value = Value::from(vec![
    ///     Value::from(1),
    ///     Value::from(vec![Value::from(2), Value::from("#")]),
    ///     Value::from(vec![Value::from(3), Value::from("@")]),
    /// ]);
    /// assert_eq!(value.scrub(&["@", "#"], ""), 2);
    /// assert_eq!(value.to_string(), "[1, [2, ''], [3, '']]");
    /// ```
    pub fn scrub(&mut self, targets: &[&str], replacement: &str) -> usize {
        let mut replaced = 0;
        self.walk_scalars_mut(|leaf| {
            if scrub_leaf(leaf, targets, replacement) {
                replaced += 1;
            }
        });
        replaced
    }
}

impl Record {
    /// Calls `visitor` on every scalar leaf below this record, depth first.
    pub fn walk_scalars_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Value),
    {
        walk_record(self, &mut visitor);
    }

    /// Replaces every text leaf equal to one of `targets` with `replacement`,
    /// descending into nested records and sequences.
    ///
    /// Returns the number of leaves replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::record;
    ///
    /// let mut record = record! {
    ///     "s1" => "@",
    ///     "s2" => "hi",
    ///     "s3" => record! { "s4" => "#" },
    /// };
    /// assert_eq!(record.scrub(&["@", "#"], ""), 2);
    /// assert_eq!(record, record! { "s1" => "", "s2" => "hi", "s3" => record! { "s4" => "" } });
    /// ```
    pub fn scrub(&mut self, targets: &[&str], replacement: &str) -> usize {
        let mut replaced = 0;
        self.walk_scalars_mut(|leaf| {
            if scrub_leaf(leaf, targets, replacement) {
                replaced += 1;
            }
        });
        replaced
    }
}

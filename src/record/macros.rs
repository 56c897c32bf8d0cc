//! Record construction macro.

/// Builds a [`Record`](crate::record::Record) from `name => value` pairs.
///
/// Values go through `Into<Value>`, so scalars, nested records and vectors
/// can be written directly. Fields keep the order they are written in.
///
/// # Examples
///
/// ```rust
/// use seqkit::record;
///
/// let person = record! {
///     "name" => "A",
///     "skills" => vec![record! { "name" => "JS" }, record! { "name" => "HTML" }],
/// };
///
/// assert_eq!(person.names().collect::<Vec<_>>(), ["name", "skills"]);
/// assert!(record! {}.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::record::Record::new();
        $(
            record.insert($name, $value);
        )+
        record
    }};
}

//! Shared behaviour of contact fields.

use std::fmt::Display;

/// A labeled contact value with a string rendering.
///
/// Implementors differ only in what they accept at construction time;
/// once built, every field is read-only and renders as its raw value.
pub trait Field: Display {
    /// The raw value.
    fn value(&self) -> &str;
}

/// Join the raw values of `fields` with `separator`.
pub fn join_values<F: Field>(fields: &[F], separator: &str) -> String {
    fields
        .iter()
        .map(Field::value)
        .collect::<Vec<_>>()
        .join(separator)
}

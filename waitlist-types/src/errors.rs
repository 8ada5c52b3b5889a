use std::collections::BTreeMap;

use crate::Field;

/// Per-field validation errors.
///
/// Absence of a key means the field is valid. Keys iterate in form order,
/// so error display order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Record an error message for a field.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Get the error message for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Clear the error for a single field (optimistic error-clearing on edit).
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.messages.remove(&field)
    }

    /// Whether every field is valid.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterate over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// The first invalid field in form order, if any.
    pub fn first(&self) -> Option<Field> {
        self.messages.keys().next().copied()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

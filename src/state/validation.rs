use crate::core::Field;
use std::collections::HashMap;

/// Current message per field. A missing entry means the field is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    entries: HashMap<Field, String>,
}

impl FieldErrors {
    pub fn set_error(&mut self, field: Field, error: impl Into<String>) {
        let error = error.into();
        if error.is_empty() {
            self.entries.remove(&field);
        } else {
            self.entries.insert(field, error);
        }
    }

    pub fn clear_error(&mut self, field: Field) {
        self.entries.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Messages the error region shows, in field order.
    pub fn visible(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .into_iter()
            .filter(|field| field.shows_error())
            .filter_map(|field| self.error(field).map(|error| (field, error)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

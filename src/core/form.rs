use crate::core::Field;
use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// Current contents of the registration form. Serialized as-is for the
/// submission body: `{firstname, lastname, email, password, terms}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValues {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub terms: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `raw` for the field's input kind and stores it.
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, field: Field, raw: Value) -> bool {
        if field == Field::Terms {
            let checked = raw.to_bool();
            let changed = self.terms != checked;
            self.terms = checked;
            return changed;
        }

        let text = raw.into_text();
        let Some(slot) = self.text_slot_mut(field) else {
            return false;
        };
        if *slot == text {
            return false;
        }
        *slot = text;
        true
    }

    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::Firstname => Value::Text(self.firstname.clone()),
            Field::Lastname => Value::Text(self.lastname.clone()),
            Field::Email => Value::Text(self.email.clone()),
            Field::Password => Value::Text(self.password.clone()),
            Field::Terms => Value::Bool(self.terms),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Firstname => Some(&mut self.firstname),
            Field::Lastname => Some(&mut self.lastname),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Terms => None,
        }
    }
}

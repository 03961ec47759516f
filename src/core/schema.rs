use crate::core::Field;
use crate::core::form::FormValues;
use crate::core::validators::{Validator, min_length, required, run_validators};
use crate::core::value::Value;
use indexmap::IndexMap;

pub const FIRSTNAME_REQUIRED: &str = "First name is required";
pub const FIRSTNAME_MIN: &str = "User needs to be 6 chars min!";
pub const LASTNAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

pub const FIRSTNAME_MIN_LEN: usize = 6;

/// Per-field validation rules, checked in declaration order.
#[derive(Default)]
pub struct Schema {
    rules: IndexMap<Field, Vec<Validator>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of the registration form. Email presence only; `terms` is
    /// declared with no rules.
    pub fn registration() -> Self {
        Self::new()
            .field(Field::Firstname, required(FIRSTNAME_REQUIRED))
            .field(
                Field::Firstname,
                min_length(FIRSTNAME_MIN_LEN, FIRSTNAME_MIN),
            )
            .field(Field::Lastname, required(LASTNAME_REQUIRED))
            .field(Field::Email, required(EMAIL_REQUIRED))
            .field(Field::Password, required(PASSWORD_REQUIRED))
            .declare(Field::Terms)
    }

    pub fn field(mut self, field: Field, validator: Validator) -> Self {
        self.rules.entry(field).or_default().push(validator);
        self
    }

    pub fn declare(mut self, field: Field) -> Self {
        self.rules.entry(field).or_default();
        self
    }

    pub fn validate_field(&self, field: Field, value: &Value) -> Result<(), String> {
        match self.rules.get(&field) {
            Some(validators) => run_validators(validators, value),
            None => Ok(()),
        }
    }

    pub fn validate_all(&self, values: &FormValues) -> Vec<(Field, String)> {
        self.rules
            .keys()
            .filter_map(|field| {
                self.validate_field(*field, &values.get(*field))
                    .err()
                    .map(|err| (*field, err))
            })
            .collect()
    }

    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.rules.iter().all(|(field, validators)| {
            run_validators(validators, &values.get(*field)).is_ok()
        })
    }
}

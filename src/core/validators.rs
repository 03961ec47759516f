use crate::core::value::Value;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &Value) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Presence check. Text must be non-empty; whitespace counts as content.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Minimum length in characters. Non-text values are left to other rules.
pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if text.chars().count() < min_len => Err(message.clone()),
        _ => Ok(()),
    })
}

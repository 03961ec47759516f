use std::fmt;

/// Raw value produced by an input widget before it is folded into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.is_empty(),
            Self::Bool(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Checkbox-style coercion: booleans pass through, text is truthy for
    /// the usual spellings, anything else is unchecked.
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Bool(v) => *v,
            Self::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            ),
            Self::None => false,
        }
    }

    /// Text-style coercion used for every non-checkbox field.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(v) => v,
            Self::Bool(v) => v.to_string(),
            Self::None => String::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn checkbox_coercion_accepts_common_truthy_text() {
        assert!(Value::from("true").to_bool());
        assert!(Value::from(" Yes ").to_bool());
        assert!(Value::from("on").to_bool());
        assert!(!Value::from("false").to_bool());
        assert!(!Value::from("").to_bool());
        assert!(!Value::None.to_bool());
        assert!(Value::Bool(true).to_bool());
    }

    #[test]
    fn text_coercion_stringifies_booleans() {
        assert_eq!(Value::Bool(false).into_text(), "false");
        assert_eq!(Value::None.into_text(), "");
        assert_eq!(Value::from("Alice").into_text(), "Alice");
    }

    #[test]
    fn emptiness_treats_booleans_as_present() {
        assert!(Value::None.is_empty());
        assert!(Value::from("").is_empty());
        assert!(!Value::Bool(false).is_empty());
    }
}

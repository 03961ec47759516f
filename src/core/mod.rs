pub mod form;
pub mod schema;
pub mod user;
pub mod validators;
pub mod value;

use std::fmt;
use std::str::FromStr;

/// Widget identifier. Form inputs use the wire name of their field.
pub type NodeId = String;

/// The five fields of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Firstname,
    Lastname,
    Email,
    Password,
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Checkbox,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Firstname,
        Field::Lastname,
        Field::Email,
        Field::Password,
        Field::Terms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Firstname => "firstname",
            Field::Lastname => "lastname",
            Field::Email => "email",
            Field::Password => "password",
            Field::Terms => "terms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Firstname => "First Name",
            Field::Lastname => "Last Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Terms => "Terms of Service",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Field::Firstname | Field::Lastname => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Password => InputKind::Password,
            Field::Terms => InputKind::Checkbox,
        }
    }

    /// Whether the error region renders this field's message.
    /// The terms slot exists in state but is never displayed.
    pub fn shows_error(self) -> bool {
        !matches!(self, Field::Terms)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

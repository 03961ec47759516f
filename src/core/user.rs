use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Record echoed by the endpoint after a successful create. Kept opaque:
/// whatever fields the server returns, in the order it returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedUser {
    fields: IndexMap<String, JsonValue>,
}

impl SubmittedUser {
    pub fn new(fields: IndexMap<String, JsonValue>) -> Self {
        Self { fields }
    }

    /// Server-assigned identifier, if present. Numeric ids are stringified.
    pub fn id(&self) -> Option<String> {
        match self.fields.get("id")? {
            JsonValue::String(id) => Some(id.clone()),
            JsonValue::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn fields(&self) -> &IndexMap<String, JsonValue> {
        &self.fields
    }

    /// One-line rendering: the JSON array of the record's values.
    pub fn values_line(&self) -> String {
        let values: Vec<&JsonValue> = self.fields.values().collect();
        serde_json::to_string(&values).unwrap_or_default()
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::field::FieldSpec;

/// Top-level definition of one form variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Endpoint path joined onto the API base when submitting.
    pub submit_path: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// Looks a field up by its record key (`group.id` for grouped flags).
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key() == key)
    }

    /// Whether `key` addresses a field of this variant.
    pub fn knows_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Names of the flag groups this variant declares, in field order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for field in &self.fields {
            if let Some(group) = &field.group
                && !groups.contains(&group.as_str())
            {
                groups.push(group);
            }
        }
        groups
    }
}

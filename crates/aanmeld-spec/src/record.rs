use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::spec::form::FormSpec;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("answers must be a JSON object")]
    NotAnObject,
}

/// The in-progress registration data, keyed by field record key.
///
/// Text inputs hold strings, flags hold booleans. Grouped flags live under
/// compound keys (`activiteiten.campagne`); [`FormRecord::to_payload`] folds
/// them back into one nested object per group for the wire format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormRecord {
    values: BTreeMap<String, Value>,
}

impl FormRecord {
    /// Fresh record for a variant: empty strings for inputs, false for flags.
    pub fn defaults(spec: &FormSpec) -> Self {
        let mut values = BTreeMap::new();
        for field in &spec.fields {
            let initial = match field.kind {
                crate::spec::field::FieldKind::Flag => Value::Bool(false),
                _ => Value::String(String::new()),
            };
            values.insert(field.key(), initial);
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String view of a field; missing or non-string values read as empty.
    pub fn text(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Boolean view of a flag; missing or non-boolean values read as unset.
    pub fn flag(&self, key: &str) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Sets a known field, rejecting keys the variant does not declare.
    pub fn set(&mut self, spec: &FormSpec, key: &str, value: Value) -> Result<(), RecordError> {
        if !spec.knows_field(key) {
            return Err(RecordError::UnknownField(key.to_string()));
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Merges a JSON object of answers. Grouped flags may arrive either flat
    /// (`"activiteiten.campagne": true`) or nested under the group name.
    /// Anything other than an object at the top level is a malformed answer
    /// file and is rejected.
    pub fn merge_json(&mut self, spec: &FormSpec, answers: &Value) -> Result<(), RecordError> {
        let Some(object) = answers.as_object() else {
            return Err(RecordError::NotAnObject);
        };
        for (name, value) in object {
            if spec.groups().contains(&name.as_str())
                && let Some(members) = value.as_object()
            {
                for (member, flag) in members {
                    self.set(spec, &format!("{}.{}", name, member), flag.clone())?;
                }
                continue;
            }
            self.set(spec, name, value.clone())?;
        }
        Ok(())
    }

    /// JSON body for submission: flat object, except each flag group becomes
    /// one nested object of booleans.
    pub fn to_payload(&self, spec: &FormSpec) -> Value {
        let mut payload = Map::new();
        let mut groups: BTreeMap<&str, Map<String, Value>> = BTreeMap::new();
        for field in &spec.fields {
            let key = field.key();
            let value = self
                .values
                .get(&key)
                .cloned()
                .unwrap_or(Value::String(String::new()));
            match &field.group {
                Some(group) => {
                    groups
                        .entry(group.as_str())
                        .or_default()
                        .insert(field.id.clone(), value);
                }
                None => {
                    payload.insert(field.id.clone(), value);
                }
            }
        }
        for (group, members) in groups {
            payload.insert(group.to_string(), Value::Object(members));
        }
        Value::Object(payload)
    }
}

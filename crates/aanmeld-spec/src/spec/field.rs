use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::expr::Expr;

/// Input kinds a field can take; the kind decides which rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text, checked for a minimum trimmed length when required.
    Text,
    /// Multi-line free text, never validated beyond requiredness.
    TextArea,
    /// Minimal shape check: something, an `@`, something, a `.`, something.
    Email,
    /// At least 8 digits after stripping whitespace; `+`, `-` and parentheses tolerated.
    Phone,
    /// ISO `YYYY-MM-DD` date with a plausibility window on the derived age.
    Date,
    /// Single-select from `choices`.
    Choice,
    /// Optional amount; empty is fine, anything else must parse as a number.
    Numeric,
    /// Boolean toggle, usually a member of a flag group.
    Flag,
}

/// Per-field error strings shown next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldMessages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid: Option<String>,
}

impl FieldMessages {
    pub fn new(required: impl Into<String>, invalid: impl Into<String>) -> Self {
        Self {
            required: Some(required.into()),
            invalid: Some(invalid.into()),
        }
    }

    /// Same message for the missing and the malformed case.
    pub fn single(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            required: Some(message.clone()),
            invalid: Some(message),
        }
    }
}

/// One field of a form variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Flag-group name; grouped fields are addressed as `group.id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// When present and false under the current record, the field is skipped
    /// by prompting and validation alike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<Expr>,
    #[serde(default)]
    pub messages: FieldMessages,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            required: false,
            min_len: None,
            choices: None,
            group: None,
            visible_if: None,
            messages: FieldMessages::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    pub fn choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(choices.iter().map(|choice| choice.to_string()).collect());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn visible_if(mut self, expr: Expr) -> Self {
        self.visible_if = Some(expr);
        self
    }

    pub fn messages(mut self, messages: FieldMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Record key for this field: `group.id` for grouped flags, the id otherwise.
    pub fn key(&self) -> String {
        match &self.group {
            Some(group) => format!("{}.{}", group, self.id),
            None => self.id.clone(),
        }
    }

    pub fn required_message(&self) -> String {
        self.messages
            .required
            .clone()
            .unwrap_or_else(|| format!("{} is verplicht", self.label))
    }

    pub fn invalid_message(&self) -> String {
        self.messages
            .invalid
            .clone()
            .unwrap_or_else(|| format!("Ongeldige waarde voor {}", self.label))
    }
}

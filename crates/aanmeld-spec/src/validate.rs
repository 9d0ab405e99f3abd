use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::record::FormRecord;
use crate::rules::{
    Violation, email_shape, optional_numeric, phone_shape, plausible_birth_date, required_choice,
    required_text,
};
use crate::spec::field::{FieldKind, FieldSpec};
use crate::spec::form::FormSpec;

/// Field record key to human-readable message; absence of a key means valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Full validation pass over the record.
///
/// Fields hidden by their `visible_if` condition are skipped entirely, which
/// is how conditional sub-fields (a voluntary contribution that only exists
/// for the voluntary membership type) stay out of the map.
pub fn validate(spec: &FormSpec, record: &FormRecord, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in &spec.fields {
        if let Some(message) = check_field(field, record, today) {
            errors.insert(field.key(), message);
        }
    }
    errors
}

/// Validates a single field by record key. Used for inline re-prompting.
pub fn validate_field(
    spec: &FormSpec,
    record: &FormRecord,
    key: &str,
    today: NaiveDate,
) -> Option<String> {
    spec.field(key)
        .and_then(|field| check_field(field, record, today))
}

fn check_field(field: &FieldSpec, record: &FormRecord, today: NaiveDate) -> Option<String> {
    if let Some(expr) = &field.visible_if
        && !expr.evaluate(record)
    {
        return None;
    }

    let value = record.text(&field.key());

    let outcome = match field.kind {
        FieldKind::Flag => Ok(()),
        FieldKind::Text | FieldKind::TextArea => {
            if field.required {
                required_text(value, field.min_len.unwrap_or(1))
            } else {
                Ok(())
            }
        }
        FieldKind::Email => optional_rule(field, value, email_shape),
        FieldKind::Phone => optional_rule(field, value, phone_shape),
        FieldKind::Date => optional_rule(field, value, |value| {
            plausible_birth_date(value, today)
        }),
        FieldKind::Choice => {
            let presence = if field.required {
                required_choice(value)
            } else {
                Ok(())
            };
            presence.and_then(|_| check_choice_membership(field, value))
        }
        FieldKind::Numeric => optional_numeric(value),
    };

    match outcome {
        Ok(()) => None,
        Err(Violation::Missing) => Some(field.required_message()),
        Err(Violation::Invalid) => Some(field.invalid_message()),
    }
}

/// Shape rules only apply once a value is present, unless the field is required.
fn optional_rule(
    field: &FieldSpec,
    value: &str,
    rule: impl Fn(&str) -> Result<(), Violation>,
) -> Result<(), Violation> {
    if value.trim().is_empty() && !field.required {
        return Ok(());
    }
    rule(value)
}

fn check_choice_membership(field: &FieldSpec, value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        return Ok(());
    }
    match &field.choices {
        Some(choices) if !choices.iter().any(|choice| choice == value) => {
            Err(Violation::Invalid)
        }
        _ => Ok(()),
    }
}

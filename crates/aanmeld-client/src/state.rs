use chrono::NaiveDate;
use serde_json::Value;

use aanmeld_spec::{ErrorMap, FormRecord, FormSpec, validate};

use crate::error::StateError;

/// Single source of truth for the in-progress record and its errors.
///
/// Edits flow in through [`FormState::set_field`]; the submission flow and
/// the presentation layer only ever read snapshots back out.
#[derive(Debug, Clone)]
pub struct FormState {
    spec: FormSpec,
    record: FormRecord,
    errors: ErrorMap,
}

impl FormState {
    pub fn new(spec: FormSpec) -> Self {
        let record = FormRecord::defaults(&spec);
        Self {
            spec,
            record,
            errors: ErrorMap::new(),
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Updates one field and optimistically clears its error, and only its
    /// error. The map can grow again only through [`FormState::validate_now`].
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), StateError> {
        self.record.set(&self.spec, name, value)?;
        self.errors.remove(name);
        Ok(())
    }

    /// Bulk-merges a JSON object of answers, e.g. a prefilled answer file.
    /// Unknown fields are rejected; existing errors are left for the next
    /// validation pass to recompute.
    pub fn merge_json(&mut self, answers: &Value) -> Result<(), StateError> {
        self.record.merge_json(&self.spec, answers)?;
        Ok(())
    }

    /// Full validation pass; replaces the error map wholesale.
    pub fn validate_now(&mut self, today: NaiveDate) -> &ErrorMap {
        self.errors = validate(&self.spec, &self.record, today);
        &self.errors
    }

    pub fn is_submit_ready(&mut self, today: NaiveDate) -> bool {
        self.validate_now(today).is_empty()
    }

    /// JSON body for the submission collaborator.
    pub fn payload(&self) -> Value {
        self.record.to_payload(&self.spec)
    }

    /// Restores the default record and clears all errors. Safe to call while
    /// a confirmation is still on screen; the next session starts clean.
    pub fn reset(&mut self) {
        self.record = FormRecord::defaults(&self.spec);
        self.errors.clear();
    }
}

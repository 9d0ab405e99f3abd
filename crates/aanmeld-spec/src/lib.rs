#![allow(missing_docs)]

pub mod expr;
pub mod record;
pub mod rules;
pub mod spec;
pub mod validate;
pub mod variants;

pub use expr::Expr;
pub use record::{FormRecord, RecordError};
pub use rules::{
    Violation, email_shape, optional_numeric, phone_shape, plausible_birth_date, required_choice,
    required_text,
};
pub use spec::{FieldKind, FieldMessages, FieldSpec, FormSpec};
pub use validate::{ErrorMap, validate, validate_field};
pub use variants::{FormVariant, cafe_form, membership_form};

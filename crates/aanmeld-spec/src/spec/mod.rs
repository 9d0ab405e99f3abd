pub mod field;
pub mod form;

pub use field::{FieldKind, FieldMessages, FieldSpec};
pub use form::FormSpec;

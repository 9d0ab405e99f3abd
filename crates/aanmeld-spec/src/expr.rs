use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::FormRecord;

/// Lightweight expression AST used for `visible_if` conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Expr {
    LiteralBool { value: bool },
    /// True when the named field's string value equals `value`.
    Eq { field: String, value: String },
    /// True when the named flag is set.
    Flag { field: String },
    And { expressions: Vec<Expr> },
    Or { expressions: Vec<Expr> },
    Not { expression: Box<Expr> },
}

impl Expr {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Expr::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Evaluates against the current record. Total: a missing or
    /// differently-typed field simply compares unequal.
    pub fn evaluate(&self, record: &FormRecord) -> bool {
        match self {
            Expr::LiteralBool { value } => *value,
            Expr::Eq { field, value } => record.text(field) == value,
            Expr::Flag { field } => record.flag(field),
            Expr::And { expressions } => expressions.iter().all(|expr| expr.evaluate(record)),
            Expr::Or { expressions } => expressions.iter().any(|expr| expr.evaluate(record)),
            Expr::Not { expression } => !expression.evaluate(record),
        }
    }
}

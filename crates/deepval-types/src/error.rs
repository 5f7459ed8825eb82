use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced when moving values across the JSON boundary.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{kind} value has no JSON representation")]
    NotRepresentable { kind: ValueKind },

    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;

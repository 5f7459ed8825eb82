//! Error types for the merge crate.

use deepval_types::ValueKind;

/// Errors reported by the strict merge entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// A composite source cannot be merged into an atomic target.
    #[error("cannot merge into a {kind} target: only arrays and objects accept entries")]
    NonCompositeTarget { kind: ValueKind },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;

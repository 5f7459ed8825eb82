//! Foundation types for deepval.
//!
//! This crate defines the closed value tree that the clone and merge
//! operations in `deepval-merge` walk, together with the runtime type
//! predicates used to classify a value before recursing into it.
//!
//! # Key Types
//!
//! - [`Value`] — Undefined, null, boolean, number, string, array, object, or function
//! - [`ValueKind`] — The kind tag of a [`Value`], used for classification and diagnostics
//! - [`Map`] — Insertion-ordered string-keyed record (the "plain object")
//! - [`Callable`] — Shared handle to an invokable function value
//! - [`TypeError`] — Failures of the JSON bridge

pub mod callable;
pub mod error;
pub mod json;
pub mod kind;
pub mod map;
pub mod predicates;
pub mod value;

pub use callable::Callable;
pub use error::{TypeError, TypeResult};
pub use kind::ValueKind;
pub use map::Map;
pub use predicates::{
    is_array, is_boolean, is_function, is_number, is_object, is_string, is_valid,
};
pub use value::{array_index, Value, MAX_ARRAY_INDEX};

//! Deep clone and deep merge for deepval value trees.
//!
//! [`clone_value`] copies every composite level of a tree while sharing
//! function values. [`merge`] folds a source tree into a target in place:
//! where both sides hold a composite at the same key the contents are
//! merged recursively, everywhere else the source value (cloned) wins.
//! Arrays are merged position by position, never concatenated.
//!
//! # Key Items
//!
//! - [`clone_value`] -- Structural copy of a value
//! - [`merge`] / [`try_merge`] -- Lenient and strict in-place deep merge
//! - [`merge_all`] -- Left-to-right layering of several sources
//! - [`MergeError`] -- Rejection reported by [`try_merge`]

pub mod clone;
pub mod error;
pub mod merge;

#[cfg(test)]
mod testing;

pub use clone::clone_value;
pub use error::{MergeError, MergeResult};
pub use merge::{merge, merge_all, try_merge, MAX_ARRAY_GAP};

pub use deepval_types::{
    is_array, is_boolean, is_function, is_number, is_object, is_string, is_valid, Callable, Map,
    Value, ValueKind,
};

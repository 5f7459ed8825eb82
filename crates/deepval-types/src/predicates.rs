//! Runtime type predicates.
//!
//! Each predicate classifies a single [`Value`] by its kind. None of them
//! has side effects or can panic. The same checks are available as
//! methods on [`Value`].

use crate::value::Value;

/// `true` iff `value` is an ordered sequence. Strings are not arrays.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// `true` iff `value` is invokable.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// `true` iff `value` is composite and defined.
///
/// Both objects and arrays qualify; `Null` and `Undefined` do not, and
/// neither do functions.
pub fn is_object(value: &Value) -> bool {
    value.kind().is_composite() && is_valid(value)
}

/// `true` iff `value` is a finite number. NaN and the infinities are rejected.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

/// `true` iff `value` is neither `Null` nor `Undefined`.
pub fn is_valid(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Undefined)
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

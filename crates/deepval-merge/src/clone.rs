//! Structural deep copy.

use deepval_types::Value;

/// Produce a structurally equal copy of `value`.
///
/// Atomic values are returned as they are; a function value comes back as a
/// handle to the same function. Arrays and objects are rebuilt level by
/// level, so no composite in the result is shared with the input. Object
/// entries keep their insertion order.
pub fn clone_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(copy_child).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), copy_child(child)))
                .collect(),
        ),
        atomic => atomic.clone(),
    }
}

fn copy_child(child: &Value) -> Value {
    if child.is_object() {
        clone_value(child)
    } else {
        child.clone()
    }
}

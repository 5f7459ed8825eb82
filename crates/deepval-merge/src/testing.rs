//! Shared fixtures for the unit tests.

use deepval_types::{Map, Value};
use proptest::prelude::*;

pub(crate) fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Finite leaves only, so generated trees always equal themselves.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

pub(crate) fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-e]", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

/// An object at the root, the shape most merges operate on.
pub(crate) fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-e]", arb_value()), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>()))
}

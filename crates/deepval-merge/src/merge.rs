//! In-place deep merge.
//!
//! The source's own keys are visited in order: object keys as inserted,
//! array positions as `"0"`, `"1"`, …. For each key, if the target already
//! holds a composite there and the source value is composite too, the merge
//! recurses into the target's value, which keeps its identity. Otherwise the
//! target's value is replaced by a clone of the source value.
//!
//! The call is a no-op when neither side is composite. When only the source
//! is composite the walk still runs, but an atomic target has nowhere to put
//! entries, so every write is discarded. [`try_merge`] reports that case
//! instead.

use deepval_types::{array_index, Value};
use tracing::{debug, trace};

use crate::clone::clone_value;
use crate::error::{MergeError, MergeResult};

/// Largest run of `Undefined` padding a single write may add past the end
/// of an array. Farther indices are skipped like non-index keys.
pub const MAX_ARRAY_GAP: usize = 1024;

/// A key of the source being visited.
#[derive(Clone, Copy, Debug)]
enum Slot<'a> {
    Name(&'a str),
    Index(usize),
}

/// Deep-merge `source` into `target` in place.
///
/// `source` is only read. Values copied into `target` are deep clones, so
/// later changes to `source` never show through.
pub fn merge(target: &mut Value, source: &Value) {
    if !target.is_object() && !source.is_object() {
        return;
    }
    if !target.is_object() {
        debug!(
            target_kind = %target.kind(),
            source_kind = %source.kind(),
            "merge target is not composite, source entries discarded"
        );
        return;
    }
    merge_entries(target, source);
}

/// Strict form of [`merge`].
///
/// Fails with [`MergeError::NonCompositeTarget`] when a composite source
/// would be merged into an atomic target; otherwise identical to [`merge`].
pub fn try_merge(target: &mut Value, source: &Value) -> MergeResult<()> {
    if source.is_object() && !target.is_object() {
        return Err(MergeError::NonCompositeTarget {
            kind: target.kind(),
        });
    }
    merge(target, source);
    Ok(())
}

/// Merge each source into `target` in turn; later sources win.
pub fn merge_all<'a, I>(target: &mut Value, sources: I)
where
    I: IntoIterator<Item = &'a Value>,
{
    for source in sources {
        merge(target, source);
    }
}

/// Walk the source's own keys. `target` is composite.
fn merge_entries(target: &mut Value, source: &Value) {
    match source {
        Value::Object(map) => {
            for (key, child) in map.iter() {
                merge_slot(target, Slot::Name(key), child);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                merge_slot(target, Slot::Index(i), child);
            }
        }
        _ => {}
    }
}

fn merge_slot(target: &mut Value, slot: Slot<'_>, incoming: &Value) {
    match target {
        Value::Object(map) => {
            let key = match slot {
                Slot::Name(name) => name.to_owned(),
                Slot::Index(i) => i.to_string(),
            };
            let mergeable = incoming.is_object() && map.get(&key).is_some_and(Value::is_object);
            if mergeable {
                trace!(key = %key, "merging nested composite");
                if let Some(existing) = map.get_mut(&key) {
                    merge_entries(existing, incoming);
                }
            } else {
                map.insert(key, clone_value(incoming));
            }
        }
        Value::Array(items) => {
            let index = match slot {
                Slot::Index(i) => i,
                Slot::Name(name) => match array_index(name) {
                    Some(i) => i,
                    None => {
                        trace!(key = name, "non-index key has no place in an array, skipped");
                        return;
                    }
                },
            };
            if index.saturating_sub(items.len()) > MAX_ARRAY_GAP {
                trace!(index, len = items.len(), "index too far past the end of the array, skipped");
                return;
            }
            if index >= items.len() {
                // Writing past the end grows the array; gaps read as undefined.
                items.resize(index, Value::Undefined);
                items.push(clone_value(incoming));
                return;
            }
            let existing = &mut items[index];
            if existing.is_object() && incoming.is_object() {
                trace!(index, "merging nested composite");
                merge_entries(existing, incoming);
            } else {
                *existing = clone_value(incoming);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_object, arb_value, value};
    use deepval_types::{Callable, ValueKind};
    use proptest::prelude::*;
    use serde_json::json;

    fn merged(target: serde_json::Value, source: serde_json::Value) -> Value {
        let mut target = value(target);
        merge(&mut target, &value(source));
        target
    }

    #[test]
    fn disjoint_keys_are_combined() {
        assert_eq!(merged(json!({"a": 1}), json!({"b": 2})), value(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn nested_objects_merge_instead_of_overwriting() {
        assert_eq!(
            merged(json!({"a": {"x": 1}}), json!({"a": {"y": 2}})),
            value(json!({"a": {"x": 1, "y": 2}}))
        );
    }

    #[test]
    fn kind_mismatch_overwrites() {
        assert_eq!(merged(json!({"a": {"x": 1}}), json!({"a": 5})), value(json!({"a": 5})));
        assert_eq!(
            merged(json!({"a": 5}), json!({"a": {"x": 1}})),
            value(json!({"a": {"x": 1}}))
        );
    }

    #[test]
    fn null_in_source_overwrites() {
        assert_eq!(
            merged(json!({"a": {"x": 1}}), json!({"a": null})),
            value(json!({"a": null}))
        );
    }

    #[test]
    fn target_keys_missing_from_source_survive() {
        assert_eq!(
            merged(json!({"keep": true, "a": {"x": 1, "z": 0}}), json!({"a": {"x": 2}})),
            value(json!({"keep": true, "a": {"x": 2, "z": 0}}))
        );
    }

    #[test]
    fn copied_values_are_independent_of_source() {
        let mut target = Value::object();
        let mut source = value(json!({"a": [1, 2]}));
        merge(&mut target, &source);

        source
            .get_mut("a")
            .and_then(Value::as_array_mut)
            .unwrap()
            .push(Value::from(3));

        assert_eq!(target, value(json!({"a": [1, 2]})));
    }

    #[test]
    fn source_is_unchanged() {
        let source = value(json!({"a": {"b": [1, {"c": 2}]}}));
        let snapshot = source.clone();
        let mut target = value(json!({"a": {"b": [{"d": 3}]}}));
        merge(&mut target, &source);
        assert_eq!(source, snapshot);
    }

    #[test]
    fn arrays_merge_by_position() {
        assert_eq!(
            merged(json!({"list": [1, 2, 3]}), json!({"list": [9]})),
            value(json!({"list": [9, 2, 3]}))
        );
        assert_eq!(
            merged(json!({"list": [{"a": 1}, {"b": 2}]}), json!({"list": [{"c": 3}]})),
            value(json!({"list": [{"a": 1, "c": 3}, {"b": 2}]}))
        );
    }

    #[test]
    fn longer_source_array_extends_target() {
        assert_eq!(merged(json!([1]), json!([7, 8, 9])), value(json!([7, 8, 9])));
    }

    #[test]
    fn array_source_into_object_uses_index_keys() {
        assert_eq!(
            merged(json!({"x": true}), json!(["a", "b"])),
            value(json!({"x": true, "0": "a", "1": "b"}))
        );
    }

    #[test]
    fn object_source_into_array_writes_index_keys_only() {
        assert_eq!(
            merged(json!([0, 1]), json!({"1": "one", "3": "three", "name": "skip"})),
            Value::Array(vec![
                Value::from(0),
                Value::from("one"),
                Value::Undefined,
                Value::from("three"),
            ])
        );
    }

    #[test]
    fn huge_index_keys_are_skipped_not_allocated() {
        assert_eq!(
            merged(json!([]), json!({"18446744073709551615": 1, "4294967295": 2})),
            value(json!([]))
        );
        assert_eq!(
            merged(json!([0]), json!({"4294967294": 1, "0": "kept"})),
            value(json!(["kept"]))
        );
    }

    #[test]
    fn padding_is_bounded_by_the_gap_limit() {
        let at_limit = MAX_ARRAY_GAP.to_string();
        let past_limit = (MAX_ARRAY_GAP + 1).to_string();

        let mut target = Value::array();
        let mut source = Value::object();
        source.as_object_mut().unwrap().insert(past_limit, Value::from(1));
        merge(&mut target, &source);
        assert_eq!(target, Value::array());

        let mut source = Value::object();
        source.as_object_mut().unwrap().insert(at_limit, Value::from(1));
        merge(&mut target, &source);
        let items = target.as_array().unwrap();
        assert_eq!(items.len(), MAX_ARRAY_GAP + 1);
        assert_eq!(items[MAX_ARRAY_GAP], Value::from(1));
        assert!(items[..MAX_ARRAY_GAP].iter().all(|v| *v == Value::Undefined));
    }

    #[test]
    fn nested_target_keeps_its_place_in_the_parent() {
        let mut target = value(json!({"first": 1, "inner": {"x": 1}, "last": 2}));
        merge(&mut target, &value(json!({"inner": {"y": 2}})));
        let keys: Vec<_> = target.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["first", "inner", "last"]);
    }

    #[test]
    fn atomic_on_both_sides_is_a_no_op() {
        let mut target = Value::from(1);
        merge(&mut target, &Value::from(2));
        assert_eq!(target, Value::from(1));

        let mut target = Value::Null;
        merge(&mut target, &Value::Undefined);
        assert_eq!(target, Value::Null);
    }

    #[test]
    fn atomic_source_into_composite_changes_nothing() {
        let mut target = value(json!({"a": 1}));
        merge(&mut target, &Value::from("text"));
        assert_eq!(target, value(json!({"a": 1})));
    }

    #[test]
    fn composite_source_into_atomic_target_is_discarded() {
        let mut target = Value::from(3);
        merge(&mut target, &value(json!({"a": 1})));
        assert_eq!(target, Value::from(3));

        let mut target = Value::Null;
        merge(&mut target, &value(json!([1])));
        assert_eq!(target, Value::Null);
    }

    #[test]
    fn try_merge_rejects_atomic_target() {
        let mut target = Value::Undefined;
        let err = try_merge(&mut target, &value(json!({"a": 1}))).unwrap_err();
        assert_eq!(
            err,
            MergeError::NonCompositeTarget {
                kind: ValueKind::Undefined
            }
        );
        assert_eq!(target, Value::Undefined);
    }

    #[test]
    fn try_merge_accepts_everything_merge_handles() {
        let mut target = value(json!({"a": {"x": 1}}));
        try_merge(&mut target, &value(json!({"a": {"y": 2}}))).unwrap();
        assert_eq!(target, value(json!({"a": {"x": 1, "y": 2}})));

        let mut atomic = Value::from(1);
        assert!(try_merge(&mut atomic, &Value::from(2)).is_ok());
    }

    #[test]
    fn merged_functions_are_shared() {
        let f = Callable::new(|_| Value::from("hi"));
        let mut source = Value::object();
        source
            .as_object_mut()
            .unwrap()
            .insert("on_event", Value::Function(f.clone()));
        let mut target = value(json!({"on_event": {"old": true}}));

        merge(&mut target, &source);

        let handler = target.get("on_event").and_then(Value::as_callable).unwrap();
        assert!(handler.ptr_eq(&f));
    }

    #[test]
    fn merge_all_applies_layers_in_order() {
        let mut target = value(json!({"level": "debug", "net": {"port": 80}}));
        let layers = [
            value(json!({"net": {"host": "a"}})),
            value(json!({"level": "warn", "net": {"host": "b"}})),
        ];
        merge_all(&mut target, &layers);
        assert_eq!(
            target,
            value(json!({"level": "warn", "net": {"port": 80, "host": "b"}}))
        );
    }

    proptest! {
        #[test]
        fn merging_a_value_into_its_clone_is_identity(v in arb_value()) {
            let mut target = clone_value(&v);
            merge(&mut target, &v);
            prop_assert_eq!(target, v);
        }

        #[test]
        fn every_source_key_lands_in_the_target(t in arb_object(), s in arb_object()) {
            let mut target = t;
            merge(&mut target, &s);
            let merged = target.as_object().unwrap();
            for key in s.as_object().unwrap().keys() {
                prop_assert!(merged.contains_key(key));
            }
        }

        #[test]
        fn atomic_source_entries_are_copied_verbatim(t in arb_object(), s in arb_object()) {
            let mut target = t;
            merge(&mut target, &s);
            for (key, incoming) in s.as_object().unwrap().iter() {
                if !incoming.is_object() {
                    prop_assert_eq!(target.get(key), Some(incoming));
                }
            }
        }
    }
}

//! Recursive union of two values that collided under the same key.
//!
//! The result depends on the shapes of both sides:
//!
//! | target      | source       | result                                        |
//! |-------------|--------------|-----------------------------------------------|
//! | any         | absent       | target                                        |
//! | sequence    | sequence     | concatenation                                 |
//! | sequence    | keyed        | target keyed by index, source assigned over it |
//! | sequence    | other        | source appended                               |
//! | overflow    | scalar       | source at the next index                      |
//! | overflow    | sequence     | each element at the next index                |
//! | overflow    | overflow     | source shifted past the target's elements     |
//! | overflow    | keyed        | plain keyed union (marker dropped)            |
//! | keyed       | scalar       | `source` recorded as a key set to `true`      |
//! | keyed       | collection   | keyed union, colliding keys merged recursively |
//! | scalar      | overflow     | overflow with target at `"0"`, source shifted |
//! | scalar      | sequence     | `[target, ...source]`                         |
//! | scalar      | other        | `[target, source]`                            |

use std::mem;

use crate::collection::{array_to_object, assign_owned};
use crate::overflow::{append_shifted, mark_overflow, push_overflow};
use crate::value::{KeyedMap, Value};

/// Merge `source` into `target`, returning their union.
///
/// Numeric-looking keys never give a plain keyed collection sequence
/// semantics; only the overflow marker does.
///
/// # Examples
///
/// ```rust
/// use nest_merge::{Value, merge};
/// use serde_json::json;
///
/// let merged = merge(
///     Value::from(json!({"foo": "bar"})),
///     Value::from(json!({"foo": {"first": "123"}})),
/// );
/// assert_eq!(merged, Value::from(json!({"foo": ["bar", {"first": "123"}]})));
/// ```
#[must_use]
pub fn merge(target: Value, source: Value) -> Value {
    if source.is_absent() {
        return target;
    }
    match target {
        Value::Sequence(items) => merge_into_sequence(items, source),
        Value::Overflow(map) => merge_into_overflow(map, source),
        Value::Keyed(map) => merge_into_keyed(map, source),
        scalar => merge_into_scalar(scalar, source),
    }
}

fn merge_into_sequence(mut items: Vec<Value>, source: Value) -> Value {
    match source {
        Value::Sequence(more) => {
            items.extend(more);
            Value::Sequence(items)
        }
        Value::Keyed(map) => {
            let mut keyed = array_to_object(items);
            assign_owned(&mut keyed, map);
            Value::Keyed(keyed)
        }
        other => {
            items.push(other);
            Value::Sequence(items)
        }
    }
}

fn merge_into_overflow(mut map: KeyedMap, source: Value) -> Value {
    match source {
        Value::Sequence(items) => {
            map.reserve(items.len());
            for item in items {
                push_overflow(&mut map, item);
            }
            Value::Overflow(map)
        }
        Value::Overflow(more) => {
            let offset = map.len();
            append_shifted(&mut map, more, offset);
            Value::Overflow(map)
        }
        Value::Keyed(more) => {
            tracing::debug!(
                len = map.len(),
                "keyed source merged into overflow collection; dropping overflow marker"
            );
            union_keyed(map, more)
        }
        scalar => {
            push_overflow(&mut map, scalar);
            Value::Overflow(map)
        }
    }
}

fn merge_into_keyed(mut map: KeyedMap, source: Value) -> Value {
    match source {
        Value::Keyed(more) | Value::Overflow(more) => union_keyed(map, more),
        Value::Sequence(items) => union_keyed(map, array_to_object(items)),
        scalar => {
            if let Some(key) = scalar.as_key() {
                map.insert(key, Value::Bool(true));
            }
            Value::Keyed(map)
        }
    }
}

fn merge_into_scalar(target: Value, source: Value) -> Value {
    match source {
        Value::Overflow(more) => {
            let mut shifted = KeyedMap::with_capacity(more.len() + 1);
            shifted.insert("0".to_owned(), target);
            append_shifted(&mut shifted, more, 1);
            mark_overflow(shifted)
        }
        Value::Sequence(items) => {
            let mut combined = Vec::with_capacity(items.len() + 1);
            combined.push(target);
            combined.extend(items);
            Value::Sequence(combined)
        }
        other => Value::Sequence(vec![target, other]),
    }
}

/// Adds every entry of `source` to `target`, merging values under keys both
/// sides define.
fn union_keyed(mut target: KeyedMap, source: KeyedMap) -> Value {
    for (key, value) in source {
        if let Some(existing) = target.get_mut(&key) {
            let current = mem::take(existing);
            *existing = merge(current, value);
        } else {
            target.insert(key, value);
        }
    }
    Value::Keyed(target)
}

impl Value {
    /// Merge `source` into `self` in place.
    ///
    /// Equivalent to `*self = merge(self, source)`.
    pub fn merge_in_place(&mut self, source: Self) {
        let target = mem::take(self);
        *self = merge(target, source);
    }
}

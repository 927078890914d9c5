//! Shallow keyed-collection primitives.

use crate::value::{KeyedMap, Value};

/// Copies every entry of `source` onto `target`, returning `target`.
///
/// Entries already present in `target` are overwritten and keep their
/// position. No recursion takes place; colliding nested collections are
/// replaced wholesale.
///
/// # Examples
///
/// ```rust
/// use nest_merge::{Value, assign};
/// use serde_json::json;
///
/// let Value::Keyed(mut target) = Value::from(json!({"a": 1, "b": 2})) else {
///     unreachable!()
/// };
/// let Value::Keyed(source) = Value::from(json!({"b": 3, "c": 4})) else {
///     unreachable!()
/// };
/// assign(&mut target, &source);
/// assert_eq!(Value::Keyed(target), Value::from(json!({"a": 1, "b": 3, "c": 4})));
/// ```
pub fn assign<'a>(target: &'a mut KeyedMap, source: &KeyedMap) -> &'a mut KeyedMap {
    target.reserve(source.len());
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
    target
}

/// Owned form of [`assign`] used when the source is consumed anyway.
pub(crate) fn assign_owned(target: &mut KeyedMap, source: KeyedMap) {
    target.extend(source);
}

/// Re-keys `items` by their stringified indices `"0".."n-1"`.
#[must_use]
pub fn array_to_object(items: Vec<Value>) -> KeyedMap {
    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), value))
        .collect()
}

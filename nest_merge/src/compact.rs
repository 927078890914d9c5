//! Post-decoding clean-up helpers.

use crate::overflow::push_overflow;
use crate::value::{KeyedMap, Value};

/// Remove undefined holes from every sequence inside `value`.
///
/// Undefined entries of keyed collections are dropped as well. Overflow
/// collections keep their marker and are re-keyed so their indices stay dense.
///
/// # Examples
///
/// ```rust
/// use nest_merge::{Value, compact};
/// use serde_json::json;
///
/// let sparse = Value::Sequence(vec!["a".into(), Value::Undefined, "c".into()]);
/// assert_eq!(compact(sparse), Value::from(json!(["a", "c"])));
/// ```
#[must_use]
pub fn compact(value: Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .filter(|item| !matches!(item, Value::Undefined))
                .map(compact)
                .collect(),
        ),
        Value::Keyed(map) => Value::Keyed(
            map.into_iter()
                .filter(|(_, item)| !matches!(item, Value::Undefined))
                .map(|(key, item)| (key, compact(item)))
                .collect(),
        ),
        Value::Overflow(map) => {
            let mut dense = KeyedMap::with_capacity(map.len());
            for (_, item) in map {
                if !matches!(item, Value::Undefined) {
                    push_overflow(&mut dense, compact(item));
                }
            }
            Value::Overflow(dense)
        }
        scalar => scalar,
    }
}

/// Apply `f` to each element of a sequence, or to `value` itself otherwise.
///
/// Decoders use this to post-process values that may or may not have been
/// combined into a sequence.
pub fn maybe_map<F>(value: Value, mut f: F) -> Value
where
    F: FnMut(Value) -> Value,
{
    match value {
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(&mut f).collect()),
        other => f(other),
    }
}

#[cfg(test)]
mod tests {
    use super::{compact, maybe_map};
    use crate::overflow::{is_overflow, mark_overflow};
    use crate::value::{KeyedMap, Value};
    use serde_json::json;

    #[test]
    fn compacts_nested_sequences() {
        let nested = Value::from(vec![
            Value::Undefined,
            Value::from(vec![Value::from("a"), Value::Undefined]),
            Value::Null,
        ]);
        assert_eq!(compact(nested), Value::from(json!([["a"], null])));
    }

    #[test]
    fn drops_undefined_keyed_entries() {
        let mut map = KeyedMap::new();
        map.insert("a".to_owned(), Value::Undefined);
        map.insert("b".to_owned(), Value::from(vec![Value::Undefined, Value::from(1_u64)]));
        assert_eq!(compact(Value::Keyed(map)), Value::from(json!({"b": [1]})));
    }

    #[test]
    fn redensifies_overflow_collections() {
        let mut map = KeyedMap::new();
        map.insert("0".to_owned(), Value::from("a"));
        map.insert("1".to_owned(), Value::Undefined);
        map.insert("2".to_owned(), Value::from("c"));

        let compacted = compact(mark_overflow(map));
        assert!(is_overflow(&compacted));
        assert_eq!(compacted, Value::from(json!({"0": "a", "1": "c"})));
    }

    #[test]
    fn maybe_map_applies_per_element() {
        let upper = |value: Value| match value {
            Value::String(text) => Value::String(text.to_uppercase()),
            other => other,
        };
        assert_eq!(
            maybe_map(Value::from(json!(["a", "b"])), upper),
            Value::from(json!(["A", "B"]))
        );
        assert_eq!(maybe_map(Value::from("c"), upper), Value::from("C"));
    }
}

//! Shared helpers for `nest_merge` integration tests.

use anyhow::{Result, anyhow};
use nest_merge::{CombineOptions, KeyedMap, Value, combine};

/// Builds a [`Value`] from a JSON literal.
#[must_use]
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Builds a sequence of string scalars.
#[must_use]
pub fn strings(items: &[&str]) -> Value {
    Value::Sequence(items.iter().copied().map(Value::from).collect())
}

/// Produces an overflow collection holding `items` by combining past a limit
/// of `items.len() - 1`.
///
/// # Errors
///
/// Returns an error when `items` is empty.
pub fn overflow(items: &[&str]) -> Result<Value> {
    let (last, rest) = items
        .split_last()
        .ok_or_else(|| anyhow!("overflow fixture needs at least one item"))?;
    Ok(combine(
        strings(rest),
        Value::from(*last),
        &CombineOptions::new(rest.len()),
    ))
}

/// Returns the keys of a keyed collection in iteration order.
///
/// # Errors
///
/// Returns an error when `value` is not a keyed collection.
pub fn keys(value: &Value) -> Result<Vec<String>> {
    value
        .as_keyed()
        .map(|map: &KeyedMap| map.keys().cloned().collect())
        .ok_or_else(|| anyhow!("expected keyed collection, got {value:?}"))
}

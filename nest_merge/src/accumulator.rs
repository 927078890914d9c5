//! Per-key accumulator table for decoding loops.
//!
//! A decoder that walks a query string sees values for the same key one at a
//! time. [`Accumulators`] owns the evolving value for every key so each new
//! arrival is folded into it in place, keeping overflow collections growing
//! without reallocation.

use indexmap::{IndexMap, map::Entry};

use crate::options::CombineOptions;
use crate::value::Value;

/// Owns one accumulated [`Value`] per decoding key.
///
/// # Examples
///
/// ```rust
/// use nest_merge::{Accumulators, CombineOptions, Value, is_overflow};
/// use serde_json::json;
///
/// let mut table = Accumulators::new(CombineOptions::new(2));
/// for value in ["a", "b", "c"] {
///     table.combine("tags", value.into());
/// }
/// table.combine("name", "x".into());
///
/// assert!(table.get("tags").is_some_and(is_overflow));
/// assert_eq!(
///     table.into_value(),
///     Value::from(json!({"tags": {"0": "a", "1": "b", "2": "c"}, "name": "x"}))
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Accumulators {
    options: CombineOptions,
    values: IndexMap<String, Value>,
}

impl Accumulators {
    /// Create an empty table that combines values using `options`.
    #[must_use]
    pub fn new(options: CombineOptions) -> Self {
        Self {
            options,
            values: IndexMap::new(),
        }
    }

    /// Options applied by [`Self::combine`].
    #[must_use]
    pub const fn options(&self) -> &CombineOptions {
        &self.options
    }

    /// Fold `value` into the accumulator for `key` using the bounded combiner.
    ///
    /// The first value for a key is stored as-is.
    pub fn combine(&mut self, key: impl Into<String>, value: Value) -> &Value {
        match self.values.entry(key.into()) {
            Entry::Occupied(entry) => {
                let accumulator = entry.into_mut();
                accumulator.combine_in_place(value, &self.options);
                accumulator
            }
            Entry::Vacant(entry) => {
                tracing::trace!(key = %entry.key(), "new accumulator");
                entry.insert(value)
            }
        }
    }

    /// Merge `value` into the accumulator for `key` using the recursive
    /// merger.
    ///
    /// The first value for a key is stored as-is.
    pub fn merge(&mut self, key: impl Into<String>, value: Value) -> &Value {
        match self.values.entry(key.into()) {
            Entry::Occupied(entry) => {
                let accumulator = entry.into_mut();
                accumulator.merge_in_place(value);
                accumulator
            }
            Entry::Vacant(entry) => {
                tracing::trace!(key = %entry.key(), "new accumulator");
                entry.insert(value)
            }
        }
    }

    /// Returns the accumulated value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Number of keys with an accumulator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no key has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the table, returning a keyed collection of every accumulator in
    /// first-seen key order.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Keyed(self.values)
    }
}

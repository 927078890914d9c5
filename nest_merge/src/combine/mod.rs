//! Bounded combination of repeated values for one decoding key.
//!
//! Decoders call [`combine`] each time another value arrives for a key that
//! already has one. Accumulated sequences are capped at
//! [`CombineOptions::array_limit`] elements; past that point the accumulator
//! becomes an overflow collection and later values are appended to it at the
//! next index without any further limit checks.

use std::mem;

use crate::collection::array_to_object;
use crate::options::CombineOptions;
use crate::overflow::{mark_overflow, push_overflow};
use crate::value::Value;

/// Fold `value` into `accumulator`, producing the next accumulator.
///
/// - An overflow accumulator receives `value` at its next index and is
///   returned without reallocating its storage.
/// - A sequence accumulator gains `value` as its last element.
/// - Any other accumulator, including a plain keyed collection, is treated as
///   a single element: the result is `[accumulator, value]`.
///
/// When the resulting sequence is longer than `options.array_limit` it is
/// converted into an overflow collection keyed `"0".."n"`. A sequence whose
/// length equals the limit stays a sequence.
///
/// # Examples
///
/// ```rust
/// use nest_merge::{CombineOptions, Value, combine, is_overflow};
/// use serde_json::json;
///
/// let options = CombineOptions::new(3);
/// let within = combine(Value::from(json!(["a", "b"])), "c".into(), &options);
/// assert_eq!(within, Value::from(json!(["a", "b", "c"])));
///
/// let over = combine(within, "d".into(), &options);
/// assert!(is_overflow(&over));
/// assert_eq!(over, Value::from(json!({"0": "a", "1": "b", "2": "c", "3": "d"})));
/// ```
#[must_use]
pub fn combine(accumulator: Value, value: Value, options: &CombineOptions) -> Value {
    match accumulator {
        Value::Overflow(mut map) => {
            push_overflow(&mut map, value);
            Value::Overflow(map)
        }
        Value::Sequence(mut items) => {
            items.push(value);
            bound_sequence(items, options.array_limit)
        }
        single => bound_sequence(vec![single, value], options.array_limit),
    }
}

fn bound_sequence(items: Vec<Value>, limit: usize) -> Value {
    if items.len() <= limit {
        return Value::Sequence(items);
    }
    tracing::debug!(
        limit,
        len = items.len(),
        "sequence exceeded array limit; storing as overflow collection"
    );
    mark_overflow(array_to_object(items))
}

impl Value {
    /// Combine `value` into `self` in place.
    ///
    /// Behaves exactly like [`combine`], but appends directly to overflow
    /// collections and to sequences below the limit, so a decoder can keep one
    /// accumulator per key and fold values into it without moving it around.
    pub fn combine_in_place(&mut self, value: Self, options: &CombineOptions) {
        match self {
            Self::Overflow(map) => push_overflow(map, value),
            Self::Sequence(items) if items.len() < options.array_limit => items.push(value),
            _ => {
                let accumulator = mem::take(self);
                *self = combine(accumulator, value, options);
            }
        }
    }
}

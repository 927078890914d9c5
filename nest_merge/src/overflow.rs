//! Overflow marker for keyed collections that replace oversized sequences.

use crate::value::{KeyedMap, Value};

/// Marks `collection` as an overflow collection.
///
/// The map is moved into the marked variant without copying. Only the bounded
/// combiner produces overflow collections, so callers outside this crate
/// should not normally need this.
///
/// # Examples
///
/// ```rust
/// use nest_merge::{KeyedMap, is_overflow, mark_overflow};
///
/// let mut map = KeyedMap::new();
/// map.insert("0".to_owned(), "a".into());
/// assert!(is_overflow(&mark_overflow(map)));
/// ```
#[must_use]
pub const fn mark_overflow(collection: KeyedMap) -> Value {
    Value::Overflow(collection)
}

/// Returns `true` if `value` carries the overflow marker.
///
/// Key shape is never consulted: a plain keyed collection with keys `"0"`,
/// `"1"`, … is not an overflow collection.
#[must_use]
pub const fn is_overflow(value: &Value) -> bool {
    matches!(value, Value::Overflow(_))
}

impl Value {
    /// Returns the element count of an overflow collection.
    #[must_use]
    pub fn overflow_len(&self) -> Option<usize> {
        match self {
            Self::Overflow(map) => Some(map.len()),
            _ => None,
        }
    }
}

/// Inserts `value` at the next dense index of an overflow map.
pub(crate) fn push_overflow(map: &mut KeyedMap, value: Value) {
    let index = map.len();
    map.insert(index.to_string(), value);
}

/// Moves the entries of `source` into `target`, shifting numeric keys up by
/// `offset`.
///
/// Keys that do not parse as indices are kept verbatim.
pub(crate) fn append_shifted(target: &mut KeyedMap, source: KeyedMap, offset: usize) {
    target.reserve(source.len());
    for (key, value) in source {
        let shifted = key
            .parse::<usize>()
            .ok()
            .and_then(|index| index.checked_add(offset))
            .map_or(key, |index| index.to_string());
        target.insert(shifted, value);
    }
}

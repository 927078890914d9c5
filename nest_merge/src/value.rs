//! Value model shared by the bounded combiner and the recursive merger.
//!
//! Values are a tagged union of scalars, sequences, keyed collections, and
//! overflow collections. The overflow marker is a variant of its own rather
//! than a reserved key, so it can never surface as data: keyed collections
//! compare equal regardless of the marker and serialise identically.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Number;

/// Storage for keyed collections.
///
/// Insertion order is preserved for iteration and serialisation, but equality
/// is order-insensitive.
pub type KeyedMap = IndexMap<String, Value>;

/// A decoded value handled by [`crate::combine()`] and [`crate::merge()`].
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absent value; merging an absent source leaves the target untouched.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(Number),
    /// String scalar.
    String(String),
    /// Ordered, zero-indexed list of values.
    Sequence(Vec<Value>),
    /// String-keyed collection.
    Keyed(KeyedMap),
    /// Keyed collection standing in for a sequence that exceeded its limit.
    ///
    /// Keys are always the dense range `"0".."n-1"`.
    Overflow(KeyedMap),
}

impl Value {
    /// Returns `true` for every variant that is neither a sequence nor a keyed
    /// collection.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Sequence(_) | Self::Keyed(_) | Self::Overflow(_))
    }

    /// Returns `true` when the value is [`Value::Undefined`] or [`Value::Null`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the elements of a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the entries of a keyed collection, overflow-marked or not.
    #[must_use]
    pub const fn as_keyed(&self) -> Option<&KeyedMap> {
        match self {
            Self::Keyed(map) | Self::Overflow(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in a keyed collection.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_keyed().and_then(|map| map.get(key))
    }

    /// Renders a scalar as the key it occupies when recorded as a present
    /// flag inside a keyed collection.
    ///
    /// Strings are used verbatim, numbers use their decimal display, and
    /// booleans become `"true"` or `"false"`. Absent values and collections
    /// have no key form.
    #[must_use]
    pub fn as_key(&self) -> Option<String> {
        match self {
            Self::String(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Bool(flag) => Some(flag.to_string()),
            Self::Undefined | Self::Null | Self::Sequence(_) | Self::Keyed(_) | Self::Overflow(_) => {
                None
            }
        }
    }

    /// Converts the value into a [`serde_json::Value`].
    ///
    /// Undefined sequence elements become `null`; undefined keyed entries are
    /// skipped. The overflow marker is not represented.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Undefined | Self::Null => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Number(number) => serde_json::Value::Number(number.clone()),
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Keyed(map) | Self::Overflow(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, value)| !matches!(value, Self::Undefined))
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Sequence(left), Self::Sequence(right)) => left == right,
            (Self::Keyed(left) | Self::Overflow(left), Self::Keyed(right) | Self::Overflow(right)) => {
                left == right
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Keyed(map) | Self::Overflow(map) => serializer.collect_map(
                map.iter()
                    .filter(|(_, value)| !matches!(value, Self::Undefined)),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Keyed(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<KeyedMap> for Value {
    fn from(map: KeyedMap) -> Self {
        Self::Keyed(map)
    }
}

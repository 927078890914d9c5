//! Overflow-aware value merging for nested-structure decoders.
//!
//! Decoders that turn flat key/value input (such as query strings) into
//! nested structures repeatedly hold a value for a key and receive another
//! one for the same key. This crate decides what single value replaces both:
//!
//! - [`combine()`] folds a new value into an accumulator, converting sequences
//!   that exceed [`CombineOptions::array_limit`] into overflow collections so
//!   attacker-supplied indices cannot force huge allocations.
//! - [`merge()`] unions two arbitrary values, recursing into keyed
//!   collections.
//! - [`is_overflow`] tells overflow collections apart from ordinary keyed
//!   collections that merely have numeric-looking keys.
//! - [`assign`] is the shallow keyed-collection copy the merger builds on.
//!
//! # Example
//!
//! ```rust
//! use nest_merge::{CombineOptions, Value, combine, is_overflow, merge};
//! use serde_json::json;
//!
//! let overflow = combine(Value::from(json!(["b"])), "c".into(), &CombineOptions::new(1));
//! assert!(is_overflow(&overflow));
//!
//! let merged = merge("a".into(), overflow);
//! assert!(is_overflow(&merged));
//! assert_eq!(merged, Value::from(json!({"0": "a", "1": "b", "2": "c"})));
//! ```

mod accumulator;
mod collection;
mod combine;
mod compact;
mod error;
mod merge;
mod options;
mod overflow;
mod result_ext;
mod value;

pub use accumulator::Accumulators;
pub use collection::{array_to_object, assign};
pub use combine::combine;
pub use compact::{compact, maybe_map};
pub use error::{MergeError, MergeResult};
pub use merge::merge;
pub use options::{CombineOptions, DEFAULT_ARRAY_LIMIT, ENV_PREFIX};
pub use overflow::{is_overflow, mark_overflow};
pub use result_ext::MergeResultExt;
pub use value::{KeyedMap, Value};

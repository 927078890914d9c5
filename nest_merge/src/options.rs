//! Options controlling the bounded combiner.
//!
//! Options can be built in code, deserialised from a JSON layer, or gathered
//! from the environment through figment. Out-of-range values such as a
//! negative `array_limit` are rejected here so that [`crate::combine()`]
//! never has to validate its inputs.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::{MergeError, MergeResult, MergeResultExt};

/// Default maximum number of elements kept in an in-memory sequence.
pub const DEFAULT_ARRAY_LIMIT: usize = 20;

/// Environment variable prefix consulted by [`CombineOptions::load`].
pub const ENV_PREFIX: &str = "NEST_MERGE_";

/// Options for [`crate::combine()`].
///
/// # Examples
///
/// ```rust
/// use nest_merge::CombineOptions;
/// use serde_json::json;
///
/// let options = CombineOptions::from_value(json!({"array_limit": 3}))?;
/// assert_eq!(options, CombineOptions::new(3));
/// # Ok::<_, std::sync::Arc<nest_merge::MergeError>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineOptions {
    /// Largest sequence length kept as a sequence. Appending beyond it
    /// converts the sequence into an overflow collection.
    pub array_limit: usize,
    /// Requests keyed collections with no reserved key names.
    ///
    /// [`crate::KeyedMap`] never reserves key names, so every collection this
    /// crate builds already satisfies the request.
    pub plain_objects: bool,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ARRAY_LIMIT)
    }
}

impl CombineOptions {
    /// Options with the given `array_limit` and `plain_objects` disabled.
    #[must_use]
    pub const fn new(array_limit: usize) -> Self {
        Self {
            array_limit,
            plain_objects: false,
        }
    }

    /// Returns a copy with `plain_objects` set.
    #[must_use]
    pub const fn with_plain_objects(mut self, plain_objects: bool) -> Self {
        self.plain_objects = plain_objects;
        self
    }

    /// Build a figment that layers environment variables starting with
    /// `prefix` over the defaults.
    #[must_use]
    pub fn figment(prefix: &str) -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(prefix))
    }

    /// Load options from `NEST_MERGE_*` environment variables over defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Gathering`] when a variable cannot be converted,
    /// for example a negative `NEST_MERGE_ARRAY_LIMIT`.
    pub fn load() -> MergeResult<Self> {
        Self::from_figment(&Self::figment(ENV_PREFIX))
    }

    /// Extract options from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Gathering`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> MergeResult<Self> {
        figment.extract().map_err(MergeError::gathering_arc)
    }

    /// Deserialise options from a JSON layer; missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Json`] when the layer does not describe valid
    /// options.
    pub fn from_value(value: serde_json::Value) -> MergeResult<Self> {
        serde_json::from_value(value).into_merge()
    }
}

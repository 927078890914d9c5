//! Extension for mapping errors to `MergeResult` concisely.
//!
//! Replaces `.map_err(|e| Arc::new(MergeError::from(e)))` at call sites.
//!
//! ```
//! use nest_merge::{MergeResult, MergeResultExt};
//!
//! fn parse_limit(raw: &str) -> MergeResult<usize> {
//!     serde_json::from_str::<usize>(raw).into_merge()
//! }
//!
//! assert_eq!(parse_limit("5").expect("limit parses"), 5);
//! assert!(parse_limit("-1").is_err());
//! ```

use std::sync::Arc;

use crate::{MergeError, MergeResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<MergeError>`
/// into a `MergeResult<T>`.
pub trait MergeResultExt<T> {
    /// Convert `Result<T, E>` into `MergeResult<T>` using `Into<MergeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MergeError>`.
    fn into_merge(self) -> MergeResult<T>;
}

impl<T, E> MergeResultExt<T> for Result<T, E>
where
    E: Into<MergeError>,
{
    fn into_merge(self) -> MergeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

//! Error types produced while loading merge options.
//!
//! The merge engine itself never fails; every pairing of values has a defined
//! result. Errors only arise when options are gathered from configuration
//! sources.

use std::sync::Arc;

use figment::Error as FigmentError;
use thiserror::Error;

/// Shared result type for fallible operations in this crate.
pub type MergeResult<T> = Result<T, Arc<MergeError>>;

/// Errors that can occur while loading merge options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// Error while gathering options from figment providers.
    #[error("Failed to gather merge options: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Error deserialising options from a JSON layer.
    #[error("Failed to deserialise merge options: {0}")]
    Json(#[from] serde_json::Error),
}

impl MergeError {
    /// Wrap a figment error as [`MergeError::Gathering`].
    #[must_use]
    pub fn gathering(err: FigmentError) -> Self {
        Self::Gathering(Box::new(err))
    }

    /// Convenience for producing a shared gathering error.
    #[must_use]
    pub fn gathering_arc(err: FigmentError) -> Arc<Self> {
        Arc::new(Self::gathering(err))
    }
}

impl From<FigmentError> for MergeError {
    fn from(err: FigmentError) -> Self {
        Self::gathering(err)
    }
}

#[cfg(test)]
mod tests {
    use super::MergeError;

    #[test]
    fn figment_errors_become_gathering() {
        let err = MergeError::from(figment::Error::from("boom"));
        assert!(matches!(err, MergeError::Gathering(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn json_errors_keep_their_message() {
        let source = serde_json::from_str::<u8>("-1").expect_err("negative u8 must fail");
        let err = MergeError::from(source);
        assert!(err.to_string().starts_with("Failed to deserialise merge options"));
    }
}

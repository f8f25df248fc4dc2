//! Storage error types

use thiserror::Error;

/// Errors raised by key-value stores and the persistence adapter
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    #[error("value under `{key}` is not a valid JSON array: {source}")]
    Parse {
        key: String,
        source: serde_json::Error,
    },

    #[error("failed to serialize value for `{key}`: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }

    /// True when the error came from reading back a corrupt value
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

//! Error types for the store crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by store backends that touch the filesystem.
///
/// The [`KeyValueStore`](crate::KeyValueStore) trait itself is infallible:
/// storage is assumed to be always available. These errors only surface from
/// explicit operations such as [`FileStore::load`](crate::FileStore::load)
/// and [`FileStore::flush`](crate::FileStore::flush).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file does not contain a JSON object of strings.
    #[error("store file {path} is not a valid key-value map: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the store contents failed.
    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = StoreError::io(
            "/tmp/folio.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/folio.json"));
        assert!(msg.contains("denied"));
    }
}

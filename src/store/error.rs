//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while persisting the submission log.
///
/// Read-side problems never surface here: a missing or unparsable blob is
/// absorbed into an empty log at the trait boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to save the submission log
    #[error("Failed to save submission log to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove the persisted submission log
    #[error("Failed to clear submission log at {path}: {source}")]
    ClearFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the storage directory
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the submission log
    #[error("Failed to serialize submission log: {0}")]
    SerializationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::HomeDirectoryNotFound;
        assert!(error.to_string().contains("home directory"));

        let error = StoreError::SaveFailed {
            path: PathBuf::from("/tmp/submissions.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("Failed to save"));
        assert!(error.to_string().contains("submissions.json"));

        let error = StoreError::SerializationFailed("bad value".to_string());
        assert!(error.to_string().contains("serialize"));
        assert!(error.to_string().contains("bad value"));
    }
}

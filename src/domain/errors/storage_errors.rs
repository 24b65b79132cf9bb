use crate::domain::value_objects::StorageKey;

/// Errors that can occur at the object-storage gateway
#[derive(Debug, Clone)]
pub enum StorageError {
    /// No stored object under the key
    NotFound { key: StorageKey },

    /// Backend failure
    Backend {
        message: String,
        source: Option<String>, // Store cause as string to allow Clone
    },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound { key } => {
                write!(f, "Stored object not found: {}", key)
            }
            StorageError::Backend { message, .. } => {
                write!(f, "Storage backend error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage gateway operations
pub type StorageResult<T> = Result<T, StorageError>;

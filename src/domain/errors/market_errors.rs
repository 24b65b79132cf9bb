use super::validation_errors::ValidationError;

/// Errors surfaced by the marketplace use cases
#[derive(Debug, Clone)]
pub enum MarketError {
    /// No trusted principal attached to the request
    Unauthenticated { reason: String },

    /// The principal lacks the role or ownership the operation requires
    Forbidden { action: String },

    /// Record, sub-document slot or list item is absent
    NotFound { resource: &'static str, id: String },

    /// Malformed or out-of-range input
    Validation { message: String },

    /// Database or object storage failed during a primary operation
    Upstream {
        operation: &'static str,
        message: String,
    },
}

impl MarketError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        MarketError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        MarketError::Validation {
            message: message.into(),
        }
    }

    pub fn forbidden(action: impl Into<String>) -> Self {
        MarketError::Forbidden {
            action: action.into(),
        }
    }

    pub fn upstream(operation: &'static str, source: impl std::fmt::Display) -> Self {
        MarketError::Upstream {
            operation,
            message: source.to_string(),
        }
    }
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketError::Unauthenticated { reason } => {
                write!(f, "Unauthenticated: {}", reason)
            }
            MarketError::Forbidden { action } => {
                write!(f, "Forbidden: {}", action)
            }
            MarketError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            MarketError::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            MarketError::Upstream { operation, message } => {
                write!(f, "Upstream failure in '{}': {}", operation, message)
            }
        }
    }
}

impl std::error::Error for MarketError {}

impl From<ValidationError> for MarketError {
    fn from(err: ValidationError) -> Self {
        MarketError::Validation {
            message: err.to_string(),
        }
    }
}

impl From<super::storage_errors::StorageError> for MarketError {
    fn from(err: super::storage_errors::StorageError) -> Self {
        use super::storage_errors::StorageError;
        match err {
            StorageError::NotFound { key } => {
                MarketError::not_found("stored file", key.to_string())
            }
            StorageError::Backend { message, .. } => MarketError::Upstream {
                operation: "object storage",
                message,
            },
        }
    }
}

/// Result type for marketplace operations
pub type MarketResult<T> = Result<T, MarketError>;

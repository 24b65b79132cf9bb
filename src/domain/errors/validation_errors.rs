/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // RecordId validation errors
    EmptyRecordId,
    RecordIdTooLong {
        actual: usize,
        max: usize,
    },
    InvalidRecordIdCharacter(char),

    // ItemId validation errors
    EmptyItemId,
    ItemIdTooLong {
        actual: usize,
        max: usize,
    },
    InvalidItemIdCharacter(char),

    // StorageKey validation errors
    EmptyStorageKey,
    StorageKeyTooLong {
        actual: usize,
        max: usize,
    },
    StorageKeyContainsNul,
    StorageKeyStartsWithSlash,
    StorageKeyEmptySegment,

    // Bucket name validation errors (storage configuration)
    BucketNameTooShort {
        actual: usize,
        min: usize,
    },
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidStart,
    BucketNameInvalidEnd,
    BucketNameInvalidCharacter(char),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // RecordId errors
            ValidationError::EmptyRecordId => write!(f, "Record id cannot be empty"),
            ValidationError::RecordIdTooLong { actual, max } => {
                write!(f, "Record id too long: {} characters (max: {})", actual, max)
            }
            ValidationError::InvalidRecordIdCharacter(c) => {
                write!(f, "Invalid character in record id: '{}'", c)
            }

            // ItemId errors
            ValidationError::EmptyItemId => write!(f, "Item id cannot be empty"),
            ValidationError::ItemIdTooLong { actual, max } => {
                write!(f, "Item id too long: {} characters (max: {})", actual, max)
            }
            ValidationError::InvalidItemIdCharacter(c) => {
                write!(f, "Invalid character in item id: '{}'", c)
            }

            // StorageKey errors
            ValidationError::EmptyStorageKey => write!(f, "Storage key cannot be empty"),
            ValidationError::StorageKeyTooLong { actual, max } => {
                write!(f, "Storage key too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::StorageKeyContainsNul => {
                write!(f, "Storage key cannot contain NUL")
            }
            ValidationError::StorageKeyStartsWithSlash => {
                write!(f, "Storage key cannot start with '/'")
            }
            ValidationError::StorageKeyEmptySegment => {
                write!(f, "Storage key cannot contain empty path segments")
            }

            // Bucket name errors
            ValidationError::BucketNameTooShort { actual, min } => {
                write!(
                    f,
                    "Bucket name too short: {} characters (min: {})",
                    actual, min
                )
            }
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidStart => {
                write!(f, "Bucket name must start with a lowercase letter or number")
            }
            ValidationError::BucketNameInvalidEnd => {
                write!(f, "Bucket name must end with a lowercase letter or number")
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only lowercase letters, numbers, hyphens and dots allowed",
                    c
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

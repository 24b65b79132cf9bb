use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Upload namespaces in the object store, one per attachment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNamespace {
    /// Resume CV documents
    ResumeCv,
    /// User avatar images
    Avatar,
    /// Banner carousel images
    BannerPost,
    /// Attachments referenced by outbound messages
    MessageUpload,
}

impl KeyNamespace {
    /// The exact prefix used in stored keys
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyNamespace::ResumeCv => "Users-cv",
            KeyNamespace::Avatar => "Users-avatar",
            KeyNamespace::BannerPost => "banner-post",
            KeyNamespace::MessageUpload => "uploadMessages",
        }
    }
}

/// A validated key (path) in the object store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StorageKey(String);

impl StorageKey {
    pub const MAX_LENGTH: usize = 512;

    const MAX_NAME_SEGMENT: usize = 120;

    /// Create a StorageKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyStorageKey);
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(ValidationError::StorageKeyTooLong {
                actual: value.len(),
                max: Self::MAX_LENGTH,
            });
        }

        if value.contains('\0') {
            return Err(ValidationError::StorageKeyContainsNul);
        }

        if value.starts_with('/') {
            return Err(ValidationError::StorageKeyStartsWithSlash);
        }

        if value.contains("//") || value.ends_with('/') {
            return Err(ValidationError::StorageKeyEmptySegment);
        }

        Ok(Self(value))
    }

    /// Build a fresh key for an upload: `{namespace}/{uuid}-{sanitized name}`.
    ///
    /// The UUID makes keys unique per upload, so concurrent uploads of the
    /// same client filename never collide.
    pub fn generate(namespace: KeyNamespace, filename: &str) -> Self {
        let name = sanitize_filename(filename);
        Self(format!("{}/{}-{}", namespace.as_str(), Uuid::new_v4(), name))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace segment (everything before the first '/')
    pub fn namespace(&self) -> &str {
        self.0.find('/').map_or(&self.0, |idx| &self.0[..idx])
    }

    /// The trailing path segment (everything after the last '/')
    pub fn file_segment(&self) -> &str {
        self.0.rfind('/').map_or(&self.0, |idx| &self.0[idx + 1..])
    }

    /// Check whether the key lives under the given namespace
    pub fn in_namespace(&self, namespace: KeyNamespace) -> bool {
        self.namespace() == namespace.as_str()
    }
}

/// Make a client-supplied filename safe to embed in a key segment
fn sanitize_filename(filename: &str) -> String {
    let mut name: String = filename
        .chars()
        .map(|c| {
            if c.is_control() || c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();

    if name.len() > StorageKey::MAX_NAME_SEGMENT {
        let mut cut = StorageKey::MAX_NAME_SEGMENT;
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        name.truncate(cut);
    }

    if name.is_empty() {
        name.push_str("file");
    }

    name
}

impl TryFrom<String> for StorageKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageKey> for String {
    fn from(key: StorageKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_storage_key() {
        assert!(StorageKey::new("Users-cv/abc-resume.pdf".to_string()).is_ok());
        assert!(StorageKey::new("banner-post/img.png".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_storage_key() {
        assert!(StorageKey::new("".to_string()).is_err());
        assert!(StorageKey::new("/leading".to_string()).is_err());
        assert!(StorageKey::new("double//slash".to_string()).is_err());
        assert!(StorageKey::new("trailing/".to_string()).is_err());
        assert!(StorageKey::new("nul\0byte".to_string()).is_err());
        assert!(StorageKey::new("x".repeat(513)).is_err());
    }

    #[test]
    fn test_generated_keys_carry_namespace_and_name() {
        let key = StorageKey::generate(KeyNamespace::ResumeCv, "resume.pdf");
        assert!(key.in_namespace(KeyNamespace::ResumeCv));
        assert!(key.file_segment().ends_with("-resume.pdf"));

        let other = StorageKey::generate(KeyNamespace::ResumeCv, "resume.pdf");
        assert_ne!(key, other);
    }

    #[test]
    fn test_generate_sanitizes_hostile_filenames() {
        let key = StorageKey::generate(KeyNamespace::Avatar, "../etc/passwd");
        assert!(key.in_namespace(KeyNamespace::Avatar));
        assert!(!key.as_str().contains("//"));
        assert!(!key.file_segment().contains('/'));

        let empty = StorageKey::generate(KeyNamespace::Avatar, "");
        assert!(empty.file_segment().ends_with("-file"));
    }

    #[test]
    fn test_segments() {
        let key = StorageKey::new("banner-post/uuid-pic.png".to_string()).unwrap();
        assert_eq!(key.namespace(), "banner-post");
        assert_eq!(key.file_segment(), "uuid-pic.png");
    }
}

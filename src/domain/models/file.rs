use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StorageKey;

/// Descriptor of a stored upload, embedded in its owning document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    /// Public URL of the stored object
    pub path: String,
    /// Original client-supplied file name
    pub filename: String,
    /// Size in bytes
    pub size: u64,
    /// Key in the object store
    pub key: StorageKey,
}

/// An upload in flight, pulled out of a multipart request
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::StorageResult;
use crate::domain::value_objects::StorageKey;

/// Gateway to the object store holding uploaded files.
///
/// Services talk to storage only through this port; the backing store is
/// injected at assembly time.
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    /// Store an object under the key, replacing any existing one
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()>;

    /// Fetch the object's bytes
    async fn get(&self, key: &StorageKey) -> StorageResult<Bytes>;

    /// Delete the object under the key
    async fn delete(&self, key: &StorageKey) -> StorageResult<()>;

    /// Check whether an object exists under the key
    async fn exists(&self, key: &StorageKey) -> StorageResult<bool>;

    /// Public URL for the key. Deterministic given the store configuration;
    /// no request is made.
    fn public_url(&self, key: &StorageKey) -> String;
}

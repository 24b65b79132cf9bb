use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    path::Path as ObjectPath, Attribute, Attributes, ObjectStore as ApacheObjectStore,
    PutOptions, PutPayload,
};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::StorageKey,
    },
    ports::storage::FileStore,
};

/// FileStore adapter over the Apache object_store crate.
///
/// `public_base` is the URL prefix objects are served from; the public URL
/// of a key is `{public_base}/{key}` and never requires a round trip.
pub struct ObjectStoreGateway {
    inner: Arc<dyn ApacheObjectStore>,
    public_base: String,
}

impl ObjectStoreGateway {
    pub fn new(store: Arc<dyn ApacheObjectStore>, public_base: String) -> Self {
        Self {
            inner: store,
            public_base,
        }
    }

    /// Memory-backed gateway for tests and development
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(object_store::memory::InMemory::new()),
            "memory://storage".to_string(),
        )
    }
}

#[async_trait]
impl FileStore for ObjectStoreGateway {
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let path = ObjectPath::from(key.as_str());
        let payload = PutPayload::from(data);

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&path, payload, options)
            .await
            .map_err(|e| StorageError::Backend {
                message: format!("Failed to put object: {}", e),
                source: Some(e.to_string()),
            })?;

        Ok(())
    }

    async fn get(&self, key: &StorageKey) -> StorageResult<Bytes> {
        let path = ObjectPath::from(key.as_str());

        let result = self.inner.get(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => StorageError::NotFound { key: key.clone() },
            _ => StorageError::Backend {
                message: format!("Failed to get object: {}", e),
                source: Some(e.to_string()),
            },
        })?;

        result.bytes().await.map_err(|e| StorageError::Backend {
            message: format!("Failed to read object bytes: {}", e),
            source: Some(e.to_string()),
        })
    }

    async fn delete(&self, key: &StorageKey) -> StorageResult<()> {
        let path = ObjectPath::from(key.as_str());

        self.inner.delete(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => StorageError::NotFound { key: key.clone() },
            _ => StorageError::Backend {
                message: format!("Failed to delete object: {}", e),
                source: Some(e.to_string()),
            },
        })?;

        Ok(())
    }

    async fn exists(&self, key: &StorageKey) -> StorageResult<bool> {
        let path = ObjectPath::from(key.as_str());

        match self.inner.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::Backend {
                message: format!("Failed to check object existence: {}", e),
                source: Some(e.to_string()),
            }),
        }
    }

    fn public_url(&self, key: &StorageKey) -> String {
        format!("{}/{}", self.public_base, key)
    }
}

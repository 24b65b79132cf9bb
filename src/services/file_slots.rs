//! Shared handling for single-slot file attachments (the CV, the avatar,
//! banner images, message attachments).
//!
//! The asymmetry between the helpers is deliberate: storing a new object
//! must succeed before the owning document changes, deleting a replaced
//! object is best-effort cleanup, and deleting on an explicit user request
//! is fatal so the slot never points at a missing object.

use tracing::warn;

use crate::domain::{
    errors::{MarketError, MarketResult, StorageError},
    models::{FileAttachment, FileUpload},
    value_objects::{KeyNamespace, StorageKey},
};
use crate::ports::storage::FileStore;

/// Store an upload under a fresh key in the namespace and return its
/// descriptor. Failure is fatal; the caller must not have mutated the
/// owning document yet.
pub async fn store_upload(
    store: &dyn FileStore,
    namespace: KeyNamespace,
    upload: FileUpload,
) -> MarketResult<FileAttachment> {
    if upload.filename.trim().is_empty() {
        return Err(MarketError::validation("uploaded file has no name"));
    }
    if upload.data.is_empty() {
        return Err(MarketError::validation("uploaded file is empty"));
    }

    let key = StorageKey::generate(namespace, &upload.filename);
    let size = upload.size();

    store
        .put(&key, upload.data, upload.content_type.as_deref())
        .await?;

    Ok(FileAttachment {
        path: store.public_url(&key),
        filename: upload.filename,
        size,
        key,
    })
}

/// Best-effort delete of an object that a slot no longer references.
/// Failure leaves an orphaned object behind, which is preferable to
/// failing the write that already happened.
pub async fn discard_replaced(store: &dyn FileStore, attachment: &FileAttachment) {
    if let Err(e) = store.delete(&attachment.key).await {
        warn!(
            key = %attachment.key,
            error = %e,
            "failed to delete replaced stored file"
        );
    }
}

/// Storage delete for an explicit user delete. A missing object counts as
/// deleted; any other failure is fatal and the caller must leave the
/// owning slot untouched.
pub async fn remove_stored(store: &dyn FileStore, attachment: &FileAttachment) -> MarketResult<()> {
    match store.delete(&attachment.key).await {
        Ok(()) => Ok(()),
        Err(StorageError::NotFound { .. }) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

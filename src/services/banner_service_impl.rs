use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{Banner, BannerImage, FileUpload, Principal},
        value_objects::{KeyNamespace, StorageKey},
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::BannerService,
        storage::FileStore,
    },
};

use super::aggregate_locks::AggregateLocks;
use super::file_slots;

/// Lock key for the one banner document
const SINGLETON: &str = "singleton";

/// Implementation of BannerService. The banner is a singleton document;
/// every mutation serializes on one lock so concurrent edits cannot race
/// the create-on-first-use path.
#[derive(Clone)]
pub struct BannerServiceImpl {
    banners: Arc<dyn DocumentCollection<Banner>>,
    store: Arc<dyn FileStore>,
    locks: Arc<AggregateLocks>,
}

impl BannerServiceImpl {
    pub fn new(
        banners: Arc<dyn DocumentCollection<Banner>>,
        store: Arc<dyn FileStore>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            banners,
            store,
            locks,
        }
    }

    /// The singleton, if it has been created yet
    async fn find_singleton(&self) -> MarketResult<Option<Banner>> {
        Ok(self.banners.list().await?.into_iter().next())
    }

    async fn load_singleton(&self) -> MarketResult<Banner> {
        self.find_singleton()
            .await?
            .ok_or_else(|| MarketError::not_found("banner", SINGLETON))
    }

    async fn persist(&self, banner: &Banner) -> MarketResult<()> {
        if !self.banners.replace(banner).await? {
            return Err(MarketError::not_found("banner", banner.id.as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl BannerService for BannerServiceImpl {
    async fn append_images(
        &self,
        principal: &Principal,
        uploads: Vec<FileUpload>,
    ) -> MarketResult<Vec<BannerImage>> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage the banner"));
        }
        if uploads.is_empty() {
            return Err(MarketError::validation("no images uploaded"));
        }

        let _guard = self.locks.acquire(Banner::COLLECTION, SINGLETON).await;

        // Store every upload before touching the document; on failure the
        // already-stored ones are unreferenced, so discard them
        let mut images = Vec::with_capacity(uploads.len());
        for upload in uploads {
            match file_slots::store_upload(&*self.store, KeyNamespace::BannerPost, upload).await {
                Ok(image) => images.push(image),
                Err(e) => {
                    for image in &images {
                        file_slots::discard_replaced(&*self.store, image).await;
                    }
                    return Err(e);
                }
            }
        }

        match self.find_singleton().await? {
            Some(mut banner) => {
                banner.append_images(images);
                self.persist(&banner).await?;
                Ok(banner.images)
            }
            None => {
                let mut banner = Banner::new();
                banner.append_images(images);
                self.banners.insert(banner.clone()).await?;
                Ok(banner.images)
            }
        }
    }

    async fn list_images(&self) -> MarketResult<Vec<BannerImage>> {
        Ok(self.load_singleton().await?.images)
    }

    async fn remove_image(&self, principal: &Principal, url: &str) -> MarketResult<usize> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage the banner"));
        }

        let _guard = self.locks.acquire(Banner::COLLECTION, SINGLETON).await;

        let mut banner = self.load_singleton().await?;
        let removed = banner.remove_images_by_url(url);

        // One storage delete for the key derived from the URL's trailing
        // segment, best-effort like any replaced-file cleanup
        let segment = url.rsplit('/').next().unwrap_or(url);
        match StorageKey::new(format!("{}/{}", KeyNamespace::BannerPost.as_str(), segment)) {
            Ok(key) => {
                if let Err(e) = self.store.delete(&key).await {
                    warn!(key = %key, error = %e, "failed to delete banner image object");
                }
            }
            Err(e) => {
                warn!(url = url, error = %e, "banner image URL yields no valid storage key");
            }
        }

        if removed > 0 {
            self.persist(&banner).await?;
        }
        Ok(removed)
    }

    async fn move_image(
        &self,
        principal: &Principal,
        old_index: usize,
        new_index: usize,
    ) -> MarketResult<Vec<BannerImage>> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage the banner"));
        }

        let _guard = self.locks.acquire(Banner::COLLECTION, SINGLETON).await;

        let mut banner = self.load_singleton().await?;
        banner.move_image(old_index, new_index)?;
        self.persist(&banner).await?;
        Ok(banner.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::persistence::InMemoryCollection;
    use crate::adapters::outbound::storage::ObjectStoreGateway;
    use crate::domain::models::Role;
    use crate::domain::value_objects::RecordId;
    use bytes::Bytes;

    fn admin() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Admin,
        }
    }

    fn member() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Member,
        }
    }

    fn upload(name: &str) -> FileUpload {
        FileUpload {
            filename: name.to_string(),
            content_type: Some("image/png".to_string()),
            data: Bytes::from_static(b"png"),
        }
    }

    fn service_with_store() -> (BannerServiceImpl, Arc<ObjectStoreGateway>) {
        let store = Arc::new(ObjectStoreGateway::in_memory());
        let service = BannerServiceImpl::new(
            Arc::new(InMemoryCollection::new()),
            store.clone(),
            Arc::new(AggregateLocks::new()),
        );
        (service, store)
    }

    fn names(images: &[BannerImage]) -> Vec<String> {
        images.iter().map(|i| i.filename.clone()).collect()
    }

    #[tokio::test]
    async fn test_banner_writes_are_admin_only() {
        let (service, _) = service_with_store();
        let denied = service.append_images(&member(), vec![upload("a.png")]).await;
        assert!(matches!(denied, Err(MarketError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_appends_accumulate_in_upload_order() {
        let (service, store) = service_with_store();
        let admin = admin();

        let first = service
            .append_images(&admin, vec![upload("a.png"), upload("b.png")])
            .await
            .unwrap();
        assert_eq!(names(&first), vec!["a.png", "b.png"]);

        let second = service
            .append_images(&admin, vec![upload("c.png")])
            .await
            .unwrap();
        assert_eq!(names(&second), vec!["a.png", "b.png", "c.png"]);

        for image in &second {
            assert!(store.exists(&image.key).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_list_without_banner_is_not_found() {
        let (service, _) = service_with_store();
        let result = service.list_images().await;
        assert!(matches!(result, Err(MarketError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_by_url_drops_matches_and_stored_object() {
        let (service, store) = service_with_store();
        let admin = admin();

        let images = service
            .append_images(&admin, vec![upload("a.png"), upload("b.png")])
            .await
            .unwrap();
        let target = images[0].clone();

        let removed = service.remove_image(&admin, &target.path).await.unwrap();
        assert_eq!(removed, 1);
        assert!(!store.exists(&target.key).await.unwrap());
        assert_eq!(names(&service.list_images().await.unwrap()), vec!["b.png"]);

        // Unknown URL still succeeds, with nothing removed
        let removed = service.remove_image(&admin, &target.path).await.unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn test_remove_without_banner_is_not_found() {
        let (service, _) = service_with_store();
        let result = service.remove_image(&admin(), "memory://storage/banner-post/x.png").await;
        assert!(matches!(result, Err(MarketError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_move_relocates_and_rejects_out_of_bounds() {
        let (service, _) = service_with_store();
        let admin = admin();

        service
            .append_images(
                &admin,
                vec![upload("a.png"), upload("b.png"), upload("c.png")],
            )
            .await
            .unwrap();

        let moved = service.move_image(&admin, 0, 2).await.unwrap();
        assert_eq!(names(&moved), vec!["b.png", "c.png", "a.png"]);

        let rejected = service.move_image(&admin, 0, 3).await;
        assert!(matches!(rejected, Err(MarketError::Validation { .. })));
        assert_eq!(
            names(&service.list_images().await.unwrap()),
            vec!["b.png", "c.png", "a.png"]
        );
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            ContactInfo, CreateProjectRequest, FileAttachment, FileUpload, ProjectItem,
            UpdateProjectRequest, User,
        },
        value_objects::{ItemId, KeyNamespace, RecordId},
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::ResumeService,
        storage::FileStore,
    },
};

use super::aggregate_locks::AggregateLocks;
use super::file_slots;

/// Implementation of ResumeService. The resume is a sub-document of the
/// user aggregate; every mutation runs load-mutate-persist under the
/// user's aggregate lock and writes the whole user back.
#[derive(Clone)]
pub struct ResumeServiceImpl {
    users: Arc<dyn DocumentCollection<User>>,
    store: Arc<dyn FileStore>,
    locks: Arc<AggregateLocks>,
}

impl ResumeServiceImpl {
    pub fn new(
        users: Arc<dyn DocumentCollection<User>>,
        store: Arc<dyn FileStore>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            users,
            store,
            locks,
        }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<User> {
        self.users
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("user", id.as_str()))
    }

    async fn persist(&self, user: &User) -> MarketResult<()> {
        if !self.users.replace(user).await? {
            return Err(MarketError::not_found("user", user.id.as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl ResumeService for ResumeServiceImpl {
    async fn add_project(
        &self,
        user_id: &RecordId,
        request: CreateProjectRequest,
    ) -> MarketResult<ProjectItem> {
        if request.title.trim().is_empty() {
            return Err(MarketError::validation("project title cannot be empty"));
        }

        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let item = ProjectItem::new(request);
        user.resume_mut().add_project(item.clone());
        self.persist(&user).await?;
        Ok(item)
    }

    async fn list_projects(&self, user_id: &RecordId) -> MarketResult<Vec<ProjectItem>> {
        let user = self.load(user_id).await?;

        // An absent or empty list both read as "nothing there yet"
        let projects = user
            .resume
            .and_then(|resume| resume.projects)
            .filter(|projects| !projects.is_empty())
            .ok_or_else(|| MarketError::not_found("project list", user_id.as_str()))?;

        Ok(projects)
    }

    async fn update_project(
        &self,
        user_id: &RecordId,
        item_id: &ItemId,
        patch: UpdateProjectRequest,
    ) -> MarketResult<ProjectItem> {
        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let updated = {
            let project = user
                .resume
                .as_mut()
                .and_then(|resume| resume.project_mut(item_id))
                .ok_or_else(|| MarketError::not_found("project", item_id.as_str()))?;
            project.apply(patch);
            project.clone()
        };

        self.persist(&user).await?;
        Ok(updated)
    }

    async fn delete_project(&self, user_id: &RecordId, item_id: &ItemId) -> MarketResult<()> {
        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let removed = user
            .resume
            .as_mut()
            .map(|resume| resume.remove_project(item_id))
            .unwrap_or(false);

        if !removed {
            return Err(MarketError::not_found("project", item_id.as_str()));
        }

        self.persist(&user).await?;
        Ok(())
    }

    async fn set_contact(
        &self,
        user_id: &RecordId,
        contact: ContactInfo,
    ) -> MarketResult<ContactInfo> {
        if contact.email.trim().is_empty() {
            return Err(MarketError::validation("contact email cannot be empty"));
        }

        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        user.resume_mut().contact = Some(contact.clone());
        self.persist(&user).await?;
        Ok(contact)
    }

    async fn get_contact(&self, user_id: &RecordId) -> MarketResult<ContactInfo> {
        let user = self.load(user_id).await?;
        user.resume
            .and_then(|resume| resume.contact)
            .ok_or_else(|| MarketError::not_found("contact info", user_id.as_str()))
    }

    async fn set_cv(
        &self,
        user_id: &RecordId,
        upload: FileUpload,
    ) -> MarketResult<FileAttachment> {
        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let attachment =
            file_slots::store_upload(&*self.store, KeyNamespace::ResumeCv, upload).await?;

        let replaced = user.resume_mut().cv.replace(attachment.clone());
        self.persist(&user).await?;

        if let Some(old) = replaced {
            file_slots::discard_replaced(&*self.store, &old).await;
        }

        Ok(attachment)
    }

    async fn get_cv(&self, user_id: &RecordId) -> MarketResult<FileAttachment> {
        let user = self.load(user_id).await?;
        user.resume
            .and_then(|resume| resume.cv)
            .ok_or_else(|| MarketError::not_found("cv", user_id.as_str()))
    }

    async fn delete_cv(&self, user_id: &RecordId) -> MarketResult<()> {
        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let Some(attachment) = user.resume.as_ref().and_then(|resume| resume.cv.clone()) else {
            // Nothing stored; deleting an empty slot succeeds
            return Ok(());
        };

        // Storage delete first: a failure here must leave the slot pointing
        // at the still-existing object
        file_slots::remove_stored(&*self.store, &attachment).await?;

        user.resume_mut().cv = None;
        self.persist(&user).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::persistence::InMemoryCollection;
    use crate::adapters::outbound::storage::ObjectStoreGateway;
    use crate::domain::errors::{StorageError, StorageResult};
    use crate::domain::models::{CreateUserRequest, Role};
    use crate::domain::value_objects::StorageKey;
    use bytes::Bytes;

    fn collections() -> Arc<InMemoryCollection<User>> {
        Arc::new(InMemoryCollection::new())
    }

    fn service_over(
        users: Arc<InMemoryCollection<User>>,
        store: Arc<dyn FileStore>,
    ) -> ResumeServiceImpl {
        ResumeServiceImpl::new(users, store, Arc::new(AggregateLocks::new()))
    }

    async fn seeded_user(users: &InMemoryCollection<User>) -> User {
        let user = User::new(CreateUserRequest {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Member,
        });
        users.insert(user.clone()).await.unwrap();
        user
    }

    fn project(title: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            title: title.to_string(),
            description: None,
            link: None,
        }
    }

    fn cv_upload(name: &str) -> FileUpload {
        FileUpload {
            filename: name.to_string(),
            content_type: Some("application/pdf".to_string()),
            data: Bytes::from_static(b"pdf"),
        }
    }

    /// FileStore whose deletes always fail, for the fatal-delete path
    struct BrokenDeleteStore {
        inner: ObjectStoreGateway,
    }

    #[async_trait]
    impl FileStore for BrokenDeleteStore {
        async fn put(
            &self,
            key: &StorageKey,
            data: Bytes,
            content_type: Option<&str>,
        ) -> StorageResult<()> {
            self.inner.put(key, data, content_type).await
        }

        async fn get(&self, key: &StorageKey) -> StorageResult<Bytes> {
            self.inner.get(key).await
        }

        async fn delete(&self, _key: &StorageKey) -> StorageResult<()> {
            Err(StorageError::Backend {
                message: "delete refused".to_string(),
                source: None,
            })
        }

        async fn exists(&self, key: &StorageKey) -> StorageResult<bool> {
            self.inner.exists(key).await
        }

        fn public_url(&self, key: &StorageKey) -> String {
            self.inner.public_url(key)
        }
    }

    #[tokio::test]
    async fn test_added_projects_get_distinct_ids_in_order() {
        let users = collections();
        let service = service_over(users.clone(), Arc::new(ObjectStoreGateway::in_memory()));
        let user = seeded_user(&users).await;

        let mut ids = Vec::new();
        for i in 0..5 {
            let item = service
                .add_project(&user.id, project(&format!("Project {}", i)))
                .await
                .unwrap();
            assert_eq!(item.id.as_str().len(), 36);
            ids.push(item.id);
        }

        let listing = service.list_projects(&user.id).await.unwrap();
        assert_eq!(
            listing.iter().map(|p| p.id.clone()).collect::<Vec<_>>(),
            ids
        );

        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_list_projects_absent_and_empty_are_not_found() {
        let users = collections();
        let service = service_over(users.clone(), Arc::new(ObjectStoreGateway::in_memory()));
        let user = seeded_user(&users).await;

        // No resume at all
        let absent = service.list_projects(&user.id).await;
        assert!(matches!(absent, Err(MarketError::NotFound { .. })));

        // List exists but is empty after the only element is removed
        let item = service.add_project(&user.id, project("One")).await.unwrap();
        service.delete_project(&user.id, &item.id).await.unwrap();
        let emptied = service.list_projects(&user.id).await;
        assert!(matches!(emptied, Err(MarketError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_project_merges_shallowly() {
        let users = collections();
        let service = service_over(users.clone(), Arc::new(ObjectStoreGateway::in_memory()));
        let user = seeded_user(&users).await;

        let item = service
            .add_project(
                &user.id,
                CreateProjectRequest {
                    title: "Engine".to_string(),
                    description: Some("v1".to_string()),
                    link: None,
                },
            )
            .await
            .unwrap();

        let updated = service
            .update_project(
                &user.id,
                &item.id,
                UpdateProjectRequest {
                    link: Some("https://example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.title, "Engine");
        assert_eq!(updated.description.as_deref(), Some("v1"));
        assert_eq!(updated.link.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_double_delete_is_not_found() {
        let users = collections();
        let service = service_over(users.clone(), Arc::new(ObjectStoreGateway::in_memory()));
        let user = seeded_user(&users).await;

        let item = service.add_project(&user.id, project("One")).await.unwrap();
        service.delete_project(&user.id, &item.id).await.unwrap();

        let again = service.delete_project(&user.id, &item.id).await;
        assert!(matches!(again, Err(MarketError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_contact_slot_is_replaced_wholesale() {
        let users = collections();
        let service = service_over(users.clone(), Arc::new(ObjectStoreGateway::in_memory()));
        let user = seeded_user(&users).await;

        assert!(matches!(
            service.get_contact(&user.id).await,
            Err(MarketError::NotFound { .. })
        ));

        service
            .set_contact(
                &user.id,
                ContactInfo {
                    email: "ada@example.com".to_string(),
                    phone: Some("123".to_string()),
                    address: None,
                    website: None,
                },
            )
            .await
            .unwrap();

        service
            .set_contact(
                &user.id,
                ContactInfo {
                    email: "ada@new.example.com".to_string(),
                    phone: None,
                    address: None,
                    website: None,
                },
            )
            .await
            .unwrap();

        let contact = service.get_contact(&user.id).await.unwrap();
        assert_eq!(contact.email, "ada@new.example.com");
        // Wholesale replacement, not a merge
        assert!(contact.phone.is_none());
    }

    #[tokio::test]
    async fn test_cv_replacement_deletes_exactly_the_old_object() {
        let users = collections();
        let gateway = Arc::new(ObjectStoreGateway::in_memory());
        let service = service_over(users.clone(), gateway.clone());
        let user = seeded_user(&users).await;

        let first = service.set_cv(&user.id, cv_upload("one.pdf")).await.unwrap();
        let second = service.set_cv(&user.id, cv_upload("two.pdf")).await.unwrap();

        assert!(!gateway.exists(&first.key).await.unwrap());
        assert!(gateway.exists(&second.key).await.unwrap());
        assert_eq!(service.get_cv(&user.id).await.unwrap().key, second.key);
    }

    #[tokio::test]
    async fn test_failed_storage_delete_leaves_the_cv_slot() {
        let users = collections();
        let store = Arc::new(BrokenDeleteStore {
            inner: ObjectStoreGateway::in_memory(),
        });
        let service = service_over(users.clone(), store);
        let user = seeded_user(&users).await;

        let stored = service.set_cv(&user.id, cv_upload("cv.pdf")).await.unwrap();

        let result = service.delete_cv(&user.id).await;
        assert!(matches!(result, Err(MarketError::Upstream { .. })));

        // Slot untouched, descriptor still served
        assert_eq!(service.get_cv(&user.id).await.unwrap().key, stored.key);
    }

    #[tokio::test]
    async fn test_delete_cv_on_empty_slot_succeeds() {
        let users = collections();
        let service = service_over(users.clone(), Arc::new(ObjectStoreGateway::in_memory()));
        let user = seeded_user(&users).await;

        service.delete_cv(&user.id).await.unwrap();
        assert!(matches!(
            service.get_cv(&user.id).await,
            Err(MarketError::NotFound { .. })
        ));
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            CreateUserRequest, FileAttachment, FileUpload, Friendship, PageRequest, Pagination,
            User, UserReport,
        },
        value_objects::{KeyNamespace, RecordId},
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::UserService,
        storage::FileStore,
    },
};

use super::aggregate_locks::AggregateLocks;
use super::file_slots;

/// Implementation of UserService over the users, reports and friendships
/// collections plus the file store for avatars
#[derive(Clone)]
pub struct UserServiceImpl {
    users: Arc<dyn DocumentCollection<User>>,
    reports: Arc<dyn DocumentCollection<UserReport>>,
    friendships: Arc<dyn DocumentCollection<Friendship>>,
    store: Arc<dyn FileStore>,
    locks: Arc<AggregateLocks>,
}

impl UserServiceImpl {
    pub fn new(
        users: Arc<dyn DocumentCollection<User>>,
        reports: Arc<dyn DocumentCollection<UserReport>>,
        friendships: Arc<dyn DocumentCollection<Friendship>>,
        store: Arc<dyn FileStore>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            users,
            reports,
            friendships,
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
impl UserService for UserServiceImpl {
    async fn register(&self, request: CreateUserRequest) -> MarketResult<User> {
        if request.full_name.trim().is_empty() {
            return Err(MarketError::validation("full name cannot be empty"));
        }
        if request.email.trim().is_empty() {
            return Err(MarketError::validation("email cannot be empty"));
        }

        let user = User::new(request);
        self.users.insert(user.clone()).await?;
        Ok(user)
    }

    async fn profile(&self, id: &RecordId) -> MarketResult<User> {
        self.load(id).await
    }

    async fn search(
        &self,
        full_name: Option<String>,
        page: PageRequest,
    ) -> MarketResult<(Vec<User>, Pagination)> {
        let mut users = self.users.list().await?;
        if let Some(query) = &full_name {
            users.retain(|user| user.matches_name(query));
        }
        Ok(page.paginate(users))
    }

    async fn set_avatar(
        &self,
        user_id: &RecordId,
        upload: FileUpload,
    ) -> MarketResult<FileAttachment> {
        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let attachment = file_slots::store_upload(&*self.store, KeyNamespace::Avatar, upload).await?;

        let replaced = user.avatar.replace(attachment.clone());
        self.persist(&user).await?;

        if let Some(old) = replaced {
            file_slots::discard_replaced(&*self.store, &old).await;
        }

        Ok(attachment)
    }

    async fn delete_avatar(&self, user_id: &RecordId) -> MarketResult<()> {
        let _guard = self.locks.acquire(User::COLLECTION, user_id.as_str()).await;

        let mut user = self.load(user_id).await?;
        let Some(attachment) = user.avatar.clone() else {
            // Nothing stored; deleting an empty slot succeeds
            return Ok(());
        };

        file_slots::remove_stored(&*self.store, &attachment).await?;

        user.avatar = None;
        self.persist(&user).await?;
        Ok(())
    }

    async fn report_user(
        &self,
        reporter_id: &RecordId,
        reported_id: &RecordId,
        reason: String,
    ) -> MarketResult<UserReport> {
        if reporter_id == reported_id {
            return Err(MarketError::validation("users cannot report themselves"));
        }
        if reason.trim().is_empty() {
            return Err(MarketError::validation("report reason cannot be empty"));
        }

        // The reported user must exist
        self.load(reported_id).await?;

        let report = UserReport::new(reporter_id.clone(), reported_id.clone(), reason);
        self.reports.insert(report.clone()).await?;
        Ok(report)
    }

    async fn request_friendship(
        &self,
        requester_id: &RecordId,
        addressee_id: &RecordId,
    ) -> MarketResult<Friendship> {
        if requester_id == addressee_id {
            return Err(MarketError::validation(
                "users cannot befriend themselves",
            ));
        }

        // The addressee must exist
        self.load(addressee_id).await?;

        let friendship = Friendship::new(requester_id.clone(), addressee_id.clone());
        self.friendships.insert(friendship.clone()).await?;
        Ok(friendship)
    }

    async fn list_friendships(&self, user_id: &RecordId) -> MarketResult<Vec<Friendship>> {
        self.load(user_id).await?;

        let mut friendships = self.friendships.list().await?;
        friendships.retain(|friendship| friendship.involves(user_id));
        Ok(friendships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::persistence::InMemoryCollection;
    use crate::adapters::outbound::storage::ObjectStoreGateway;
    use crate::domain::models::Role;
    use bytes::Bytes;

    fn service() -> UserServiceImpl {
        UserServiceImpl::new(
            Arc::new(InMemoryCollection::new()),
            Arc::new(InMemoryCollection::new()),
            Arc::new(InMemoryCollection::new()),
            Arc::new(ObjectStoreGateway::in_memory()),
            Arc::new(AggregateLocks::new()),
        )
    }

    fn draft(name: &str) -> CreateUserRequest {
        CreateUserRequest {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: Role::Member,
        }
    }

    fn upload(name: &str) -> FileUpload {
        FileUpload {
            filename: name.to_string(),
            content_type: Some("image/png".to_string()),
            data: Bytes::from_static(b"png bytes"),
        }
    }

    #[tokio::test]
    async fn test_register_and_fetch_profile() {
        let service = service();
        let user = service.register(draft("Ada Lovelace")).await.unwrap();

        let fetched = service.profile(&user.id).await.unwrap();
        assert_eq!(fetched.full_name, "Ada Lovelace");
        assert!(fetched.resume.is_none());
    }

    #[tokio::test]
    async fn test_search_filters_by_name_substring() {
        let service = service();
        service.register(draft("Ada Lovelace")).await.unwrap();
        service.register(draft("Grace Hopper")).await.unwrap();
        service.register(draft("Ada Yonath")).await.unwrap();

        let (hits, pagination) = service
            .search(Some("ada".to_string()), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(pagination.total_items, 2);
        assert!(hits.iter().all(|u| u.matches_name("ada")));
    }

    #[tokio::test]
    async fn test_avatar_replacement_deletes_the_old_object() {
        let service = service();
        let user = service.register(draft("Ada Lovelace")).await.unwrap();

        let first = service.set_avatar(&user.id, upload("one.png")).await.unwrap();
        let second = service.set_avatar(&user.id, upload("two.png")).await.unwrap();

        assert!(!service.store.exists(&first.key).await.unwrap());
        assert!(service.store.exists(&second.key).await.unwrap());
        assert_eq!(
            service.profile(&user.id).await.unwrap().avatar.unwrap().key,
            second.key
        );
    }

    #[tokio::test]
    async fn test_delete_avatar_is_idempotent_on_empty_slot() {
        let service = service();
        let user = service.register(draft("Ada Lovelace")).await.unwrap();

        service.delete_avatar(&user.id).await.unwrap();

        service.set_avatar(&user.id, upload("a.png")).await.unwrap();
        service.delete_avatar(&user.id).await.unwrap();
        service.delete_avatar(&user.id).await.unwrap();
        assert!(service.profile(&user.id).await.unwrap().avatar.is_none());
    }

    #[tokio::test]
    async fn test_self_report_rejected() {
        let service = service();
        let user = service.register(draft("Ada Lovelace")).await.unwrap();

        let result = service
            .report_user(&user.id, &user.id, "spam".to_string())
            .await;
        assert!(matches!(result, Err(MarketError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_friendships_list_covers_both_sides() {
        let service = service();
        let ada = service.register(draft("Ada Lovelace")).await.unwrap();
        let grace = service.register(draft("Grace Hopper")).await.unwrap();
        let alan = service.register(draft("Alan Turing")).await.unwrap();

        service.request_friendship(&ada.id, &grace.id).await.unwrap();
        service.request_friendship(&alan.id, &ada.id).await.unwrap();
        service.request_friendship(&grace.id, &alan.id).await.unwrap();

        let for_ada = service.list_friendships(&ada.id).await.unwrap();
        assert_eq!(for_ada.len(), 2);
        assert!(for_ada.iter().all(|f| f.involves(&ada.id)));
    }

    #[tokio::test]
    async fn test_friendship_with_unknown_addressee_is_not_found() {
        let service = service();
        let ada = service.register(draft("Ada Lovelace")).await.unwrap();
        let ghost = RecordId::generate();

        let result = service.request_friendship(&ada.id, &ghost).await;
        assert!(matches!(result, Err(MarketError::NotFound { .. })));
    }
}

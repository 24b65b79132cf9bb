use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    ContactInfo, CreateProjectRequest, CreateUserRequest, FileAttachment, FileUpload, Friendship,
    PageRequest, Pagination, ProjectItem, UpdateProjectRequest, User, UserReport,
};
use crate::domain::value_objects::{ItemId, RecordId};

/// Account-level operations on users
#[async_trait]
pub trait UserService: Send + Sync + 'static {
    /// Create a user record
    async fn register(&self, request: CreateUserRequest) -> MarketResult<User>;

    /// Fetch a user by id
    async fn profile(&self, id: &RecordId) -> MarketResult<User>;

    /// Directory search: case-insensitive substring on the full name
    async fn search(
        &self,
        full_name: Option<String>,
        page: PageRequest,
    ) -> MarketResult<(Vec<User>, Pagination)>;

    /// Store a new avatar, replacing (and best-effort deleting) the old one
    async fn set_avatar(
        &self,
        user_id: &RecordId,
        upload: FileUpload,
    ) -> MarketResult<FileAttachment>;

    /// Remove the avatar; no-op success when the slot is already empty
    async fn delete_avatar(&self, user_id: &RecordId) -> MarketResult<()>;

    /// File a report against another user
    async fn report_user(
        &self,
        reporter_id: &RecordId,
        reported_id: &RecordId,
        reason: String,
    ) -> MarketResult<UserReport>;

    /// Open a friendship request towards another user
    async fn request_friendship(
        &self,
        requester_id: &RecordId,
        addressee_id: &RecordId,
    ) -> MarketResult<Friendship>;

    /// Friendships the user is part of, either side
    async fn list_friendships(&self, user_id: &RecordId) -> MarketResult<Vec<Friendship>>;
}

/// The resume editor: list-valued projects, the contact slot and the CV
/// file slot, all owned by the user's resume sub-document.
#[async_trait]
pub trait ResumeService: Send + Sync + 'static {
    /// Append a project with a freshly generated id
    async fn add_project(
        &self,
        user_id: &RecordId,
        request: CreateProjectRequest,
    ) -> MarketResult<ProjectItem>;

    /// Projects in insertion order; absent or empty list is a not-found
    async fn list_projects(&self, user_id: &RecordId) -> MarketResult<Vec<ProjectItem>>;

    /// Shallow-merge update of one project, located by id
    async fn update_project(
        &self,
        user_id: &RecordId,
        item_id: &ItemId,
        patch: UpdateProjectRequest,
    ) -> MarketResult<ProjectItem>;

    /// Remove one project by id
    async fn delete_project(&self, user_id: &RecordId, item_id: &ItemId) -> MarketResult<()>;

    /// Replace the contact slot wholesale
    async fn set_contact(
        &self,
        user_id: &RecordId,
        contact: ContactInfo,
    ) -> MarketResult<ContactInfo>;

    async fn get_contact(&self, user_id: &RecordId) -> MarketResult<ContactInfo>;

    /// Store a new CV, replacing (and best-effort deleting) the old one
    async fn set_cv(&self, user_id: &RecordId, upload: FileUpload)
        -> MarketResult<FileAttachment>;

    async fn get_cv(&self, user_id: &RecordId) -> MarketResult<FileAttachment>;

    /// Remove the CV. Idempotent on an empty slot; a storage failure is
    /// fatal and leaves the slot untouched.
    async fn delete_cv(&self, user_id: &RecordId) -> MarketResult<()>;
}

use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    CreateJobRequest, Job, JobFilter, MessageChannel, PageRequest, Pagination, Principal,
    UpdateJobRequest,
};
use crate::domain::value_objects::RecordId;

/// Job board operations
#[async_trait]
pub trait JobService: Send + Sync + 'static {
    /// Create a posting owned by the caller (employer or admin)
    async fn create(&self, principal: &Principal, request: CreateJobRequest) -> MarketResult<Job>;

    async fn get(&self, id: &RecordId) -> MarketResult<Job>;

    /// Filtered listing in insertion order
    async fn list(
        &self,
        filter: JobFilter,
        page: PageRequest,
    ) -> MarketResult<(Vec<Job>, Pagination)>;

    /// Shallow-merge update by the owner or an admin
    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateJobRequest,
    ) -> MarketResult<Job>;

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()>;

    /// Rendered outbound message for the posting
    async fn share_message(&self, id: &RecordId, channel: MessageChannel) -> MarketResult<String>;
}

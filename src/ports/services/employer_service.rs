use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    CreateEmploymentRequest, EmploymentRequest, PageRequest, Pagination, Principal, RequestStatus,
};
use crate::domain::value_objects::RecordId;

/// Business-service requests submitted by companies and reviewed by admins
#[async_trait]
pub trait EmployerService: Send + Sync + 'static {
    /// Submit a request; it starts out pending
    async fn submit(
        &self,
        principal: &Principal,
        request: CreateEmploymentRequest,
    ) -> MarketResult<EmploymentRequest>;

    /// Fetch one request; requester or admin
    async fn get(&self, principal: &Principal, id: &RecordId) -> MarketResult<EmploymentRequest>;

    /// Admin listing of all requests
    async fn list(
        &self,
        principal: &Principal,
        page: PageRequest,
    ) -> MarketResult<(Vec<EmploymentRequest>, Pagination)>;

    /// Admin decision; notifies the requester
    async fn update_status(
        &self,
        principal: &Principal,
        id: &RecordId,
        status: RequestStatus,
    ) -> MarketResult<EmploymentRequest>;

    /// Withdraw or clean up a request; requester or admin
    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()>;
}

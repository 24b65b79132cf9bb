use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    CreateDiscoverTagRequest, CreateOfficeRequest, DiscoverTag, Office, PageRequest, Pagination,
    Principal, UpdateDiscoverTagRequest, UpdateOfficeRequest,
};
use crate::domain::value_objects::RecordId;

/// Office directory; writes are admin-only
#[async_trait]
pub trait OfficeService: Send + Sync + 'static {
    async fn create(
        &self,
        principal: &Principal,
        request: CreateOfficeRequest,
    ) -> MarketResult<Office>;

    async fn get(&self, id: &RecordId) -> MarketResult<Office>;

    async fn list(&self, page: PageRequest) -> MarketResult<(Vec<Office>, Pagination)>;

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateOfficeRequest,
    ) -> MarketResult<Office>;

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()>;
}

/// Discover-page tags; writes are admin-only
#[async_trait]
pub trait DiscoverTagService: Send + Sync + 'static {
    async fn create(
        &self,
        principal: &Principal,
        request: CreateDiscoverTagRequest,
    ) -> MarketResult<DiscoverTag>;

    async fn list(&self, page: PageRequest) -> MarketResult<(Vec<DiscoverTag>, Pagination)>;

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateDiscoverTagRequest,
    ) -> MarketResult<DiscoverTag>;

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()>;
}

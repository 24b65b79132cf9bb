use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            CreateDiscoverTagRequest, CreateOfficeRequest, DiscoverTag, Office, PageRequest,
            Pagination, Principal, UpdateDiscoverTagRequest, UpdateOfficeRequest,
        },
        value_objects::RecordId,
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::{DiscoverTagService, OfficeService},
    },
};

use super::aggregate_locks::AggregateLocks;

/// Implementation of OfficeService; all writes require an admin principal
#[derive(Clone)]
pub struct OfficeServiceImpl {
    offices: Arc<dyn DocumentCollection<Office>>,
    locks: Arc<AggregateLocks>,
}

impl OfficeServiceImpl {
    pub fn new(offices: Arc<dyn DocumentCollection<Office>>, locks: Arc<AggregateLocks>) -> Self {
        Self { offices, locks }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<Office> {
        self.offices
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("office", id.as_str()))
    }
}

#[async_trait]
impl OfficeService for OfficeServiceImpl {
    async fn create(
        &self,
        principal: &Principal,
        request: CreateOfficeRequest,
    ) -> MarketResult<Office> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage offices"));
        }
        if request.name.trim().is_empty() {
            return Err(MarketError::validation("office name cannot be empty"));
        }

        let office = Office::new(request);
        self.offices.insert(office.clone()).await?;
        Ok(office)
    }

    async fn get(&self, id: &RecordId) -> MarketResult<Office> {
        self.load(id).await
    }

    async fn list(&self, page: PageRequest) -> MarketResult<(Vec<Office>, Pagination)> {
        let offices = self.offices.list().await?;
        Ok(page.paginate(offices))
    }

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateOfficeRequest,
    ) -> MarketResult<Office> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage offices"));
        }

        let _guard = self.locks.acquire(Office::COLLECTION, id.as_str()).await;

        let mut office = self.load(id).await?;
        office.apply(update);
        if !self.offices.replace(&office).await? {
            return Err(MarketError::not_found("office", id.as_str()));
        }
        Ok(office)
    }

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage offices"));
        }

        if !self.offices.remove(id).await? {
            return Err(MarketError::not_found("office", id.as_str()));
        }
        Ok(())
    }
}

/// Implementation of DiscoverTagService; all writes require an admin
/// principal
#[derive(Clone)]
pub struct DiscoverTagServiceImpl {
    tags: Arc<dyn DocumentCollection<DiscoverTag>>,
    locks: Arc<AggregateLocks>,
}

impl DiscoverTagServiceImpl {
    pub fn new(tags: Arc<dyn DocumentCollection<DiscoverTag>>, locks: Arc<AggregateLocks>) -> Self {
        Self { tags, locks }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<DiscoverTag> {
        self.tags
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("discover tag", id.as_str()))
    }
}

#[async_trait]
impl DiscoverTagService for DiscoverTagServiceImpl {
    async fn create(
        &self,
        principal: &Principal,
        request: CreateDiscoverTagRequest,
    ) -> MarketResult<DiscoverTag> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage discover tags"));
        }
        if request.name.trim().is_empty() {
            return Err(MarketError::validation("tag name cannot be empty"));
        }

        let tag = DiscoverTag::new(request);
        self.tags.insert(tag.clone()).await?;
        Ok(tag)
    }

    async fn list(&self, page: PageRequest) -> MarketResult<(Vec<DiscoverTag>, Pagination)> {
        let tags = self.tags.list().await?;
        Ok(page.paginate(tags))
    }

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateDiscoverTagRequest,
    ) -> MarketResult<DiscoverTag> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage discover tags"));
        }

        let _guard = self.locks.acquire(DiscoverTag::COLLECTION, id.as_str()).await;

        let mut tag = self.load(id).await?;
        tag.apply(update);
        if !self.tags.replace(&tag).await? {
            return Err(MarketError::not_found("discover tag", id.as_str()));
        }
        Ok(tag)
    }

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage discover tags"));
        }

        if !self.tags.remove(id).await? {
            return Err(MarketError::not_found("discover tag", id.as_str()));
        }
        Ok(())
    }
}

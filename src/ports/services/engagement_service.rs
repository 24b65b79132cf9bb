use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    MarketStatistics, Notification, PageRequest, Pagination, Principal,
};
use crate::domain::value_objects::RecordId;

/// Per-user in-app notifications
#[async_trait]
pub trait NotificationService: Send + Sync + 'static {
    /// Write a notification for a recipient
    async fn notify(
        &self,
        recipient_id: &RecordId,
        title: String,
        body: String,
    ) -> MarketResult<Notification>;

    /// The recipient's notifications, newest last (insertion order)
    async fn list_for(
        &self,
        user_id: &RecordId,
        page: PageRequest,
    ) -> MarketResult<(Vec<Notification>, Pagination)>;

    /// Mark one notification read; recipient only
    async fn mark_read(&self, principal: &Principal, id: &RecordId) -> MarketResult<Notification>;

    /// Delete one notification; recipient or admin
    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()>;
}

/// Admin overview counters
#[async_trait]
pub trait StatisticsService: Send + Sync + 'static {
    async fn overview(&self, principal: &Principal) -> MarketResult<MarketStatistics>;
}

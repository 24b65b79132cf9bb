use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            DiscoverTag, EmploymentRequest, Friendship, Job, MarketStatistics, Notification,
            Office, PageRequest, Pagination, Principal, Tournament, User, UserReport,
        },
        value_objects::RecordId,
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::{NotificationService, StatisticsService},
    },
};

use super::aggregate_locks::AggregateLocks;

/// Implementation of NotificationService over the notifications collection
#[derive(Clone)]
pub struct NotificationServiceImpl {
    notifications: Arc<dyn DocumentCollection<Notification>>,
    locks: Arc<AggregateLocks>,
}

impl NotificationServiceImpl {
    pub fn new(
        notifications: Arc<dyn DocumentCollection<Notification>>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            notifications,
            locks,
        }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<Notification> {
        self.notifications
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("notification", id.as_str()))
    }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn notify(
        &self,
        recipient_id: &RecordId,
        title: String,
        body: String,
    ) -> MarketResult<Notification> {
        let notification = Notification::new(recipient_id.clone(), title, body);
        self.notifications.insert(notification.clone()).await?;
        Ok(notification)
    }

    async fn list_for(
        &self,
        user_id: &RecordId,
        page: PageRequest,
    ) -> MarketResult<(Vec<Notification>, Pagination)> {
        let mut notifications = self.notifications.list().await?;
        notifications.retain(|notification| &notification.recipient_id == user_id);
        Ok(page.paginate(notifications))
    }

    async fn mark_read(&self, principal: &Principal, id: &RecordId) -> MarketResult<Notification> {
        let _guard = self
            .locks
            .acquire(Notification::COLLECTION, id.as_str())
            .await;

        let mut notification = self.load(id).await?;
        if notification.recipient_id != principal.id {
            return Err(MarketError::forbidden("read this notification"));
        }

        notification.read = true;
        if !self.notifications.replace(&notification).await? {
            return Err(MarketError::not_found("notification", id.as_str()));
        }
        Ok(notification)
    }

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()> {
        let notification = self.load(id).await?;
        if !principal.may_manage(&notification.recipient_id) {
            return Err(MarketError::forbidden("delete this notification"));
        }

        if !self.notifications.remove(id).await? {
            return Err(MarketError::not_found("notification", id.as_str()));
        }
        Ok(())
    }
}

/// Implementation of StatisticsService: one count per collection
#[derive(Clone)]
pub struct StatisticsServiceImpl {
    users: Arc<dyn DocumentCollection<User>>,
    jobs: Arc<dyn DocumentCollection<Job>>,
    offices: Arc<dyn DocumentCollection<Office>>,
    discover_tags: Arc<dyn DocumentCollection<DiscoverTag>>,
    tournaments: Arc<dyn DocumentCollection<Tournament>>,
    employment_requests: Arc<dyn DocumentCollection<EmploymentRequest>>,
    notifications: Arc<dyn DocumentCollection<Notification>>,
    friendships: Arc<dyn DocumentCollection<Friendship>>,
    user_reports: Arc<dyn DocumentCollection<UserReport>>,
}

impl StatisticsServiceImpl {
    pub fn new(
        users: Arc<dyn DocumentCollection<User>>,
        jobs: Arc<dyn DocumentCollection<Job>>,
        offices: Arc<dyn DocumentCollection<Office>>,
        discover_tags: Arc<dyn DocumentCollection<DiscoverTag>>,
        tournaments: Arc<dyn DocumentCollection<Tournament>>,
        employment_requests: Arc<dyn DocumentCollection<EmploymentRequest>>,
        notifications: Arc<dyn DocumentCollection<Notification>>,
        friendships: Arc<dyn DocumentCollection<Friendship>>,
        user_reports: Arc<dyn DocumentCollection<UserReport>>,
    ) -> Self {
        Self {
            users,
            jobs,
            offices,
            discover_tags,
            tournaments,
            employment_requests,
            notifications,
            friendships,
            user_reports,
        }
    }
}

#[async_trait]
impl StatisticsService for StatisticsServiceImpl {
    async fn overview(&self, principal: &Principal) -> MarketResult<MarketStatistics> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("view statistics"));
        }

        Ok(MarketStatistics {
            users: self.users.count().await?,
            jobs: self.jobs.count().await?,
            offices: self.offices.count().await?,
            discover_tags: self.discover_tags.count().await?,
            tournaments: self.tournaments.count().await?,
            employment_requests: self.employment_requests.count().await?,
            notifications: self.notifications.count().await?,
            friendships: self.friendships.count().await?,
            user_reports: self.user_reports.count().await?,
        })
    }
}

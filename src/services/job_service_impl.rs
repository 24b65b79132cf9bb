use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            CreateJobRequest, Job, JobFilter, MessageChannel, PageRequest, Pagination, Principal,
            UpdateJobRequest,
        },
        value_objects::RecordId,
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::{JobService, MessagingService},
    },
};

use super::aggregate_locks::AggregateLocks;

/// Implementation of JobService over the jobs collection
#[derive(Clone)]
pub struct JobServiceImpl {
    jobs: Arc<dyn DocumentCollection<Job>>,
    messaging: Arc<dyn MessagingService>,
    locks: Arc<AggregateLocks>,
}

impl JobServiceImpl {
    pub fn new(
        jobs: Arc<dyn DocumentCollection<Job>>,
        messaging: Arc<dyn MessagingService>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            jobs,
            messaging,
            locks,
        }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<Job> {
        self.jobs
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("job", id.as_str()))
    }
}

#[async_trait]
impl JobService for JobServiceImpl {
    async fn create(&self, principal: &Principal, request: CreateJobRequest) -> MarketResult<Job> {
        if !principal.can_post_jobs() {
            return Err(MarketError::forbidden("post jobs"));
        }
        if request.title.trim().is_empty() {
            return Err(MarketError::validation("job title cannot be empty"));
        }
        if request.company.trim().is_empty() {
            return Err(MarketError::validation("company cannot be empty"));
        }

        let job = Job::new(principal.id.clone(), request);
        self.jobs.insert(job.clone()).await?;
        Ok(job)
    }

    async fn get(&self, id: &RecordId) -> MarketResult<Job> {
        self.load(id).await
    }

    async fn list(
        &self,
        filter: JobFilter,
        page: PageRequest,
    ) -> MarketResult<(Vec<Job>, Pagination)> {
        let mut jobs = self.jobs.list().await?;
        if !filter.is_empty() {
            jobs.retain(|job| filter.matches(job));
        }
        Ok(page.paginate(jobs))
    }

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateJobRequest,
    ) -> MarketResult<Job> {
        let _guard = self.locks.acquire(Job::COLLECTION, id.as_str()).await;

        let mut job = self.load(id).await?;
        if !principal.may_manage(&job.owner_id) {
            return Err(MarketError::forbidden("update this job"));
        }

        job.apply(update);
        if !self.jobs.replace(&job).await? {
            return Err(MarketError::not_found("job", id.as_str()));
        }
        Ok(job)
    }

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()> {
        let _guard = self.locks.acquire(Job::COLLECTION, id.as_str()).await;

        let job = self.load(id).await?;
        if !principal.may_manage(&job.owner_id) {
            return Err(MarketError::forbidden("delete this job"));
        }

        if !self.jobs.remove(id).await? {
            return Err(MarketError::not_found("job", id.as_str()));
        }
        Ok(())
    }

    async fn share_message(&self, id: &RecordId, channel: MessageChannel) -> MarketResult<String> {
        let job = self.load(id).await?;
        Ok(self.messaging.render_job_post(&job, channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::persistence::InMemoryCollection;
    use crate::adapters::outbound::storage::ObjectStoreGateway;
    use crate::domain::models::Role;
    use crate::services::MessagingServiceImpl;

    fn service() -> JobServiceImpl {
        JobServiceImpl::new(
            Arc::new(InMemoryCollection::new()),
            Arc::new(MessagingServiceImpl::new(Arc::new(
                ObjectStoreGateway::in_memory(),
            ))),
            Arc::new(AggregateLocks::new()),
        )
    }

    fn employer() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Employer,
        }
    }

    fn member() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Member,
        }
    }

    fn admin() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Admin,
        }
    }

    fn draft(title: &str, tags: &[&str]) -> CreateJobRequest {
        CreateJobRequest {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Oslo".to_string(),
            description: "Ship things".to_string(),
            salary_range: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_members_cannot_post_jobs() {
        let service = service();
        let result = service.create(&member(), draft("Engineer", &[])).await;
        assert!(matches!(result, Err(MarketError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_owner_and_admin_can_update_others_cannot() {
        let service = service();
        let owner = employer();
        let job = service
            .create(&owner, draft("Engineer", &["rust"]))
            .await
            .unwrap();

        let stranger = employer();
        let denied = service
            .update(
                &stranger,
                &job.id,
                UpdateJobRequest {
                    title: Some("Hijacked".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(denied, Err(MarketError::Forbidden { .. })));

        let by_owner = service
            .update(
                &owner,
                &job.id,
                UpdateJobRequest {
                    location: Some("Bergen".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(by_owner.location, "Bergen");

        service.delete(&admin(), &job.id).await.unwrap();
        assert!(matches!(
            service.get(&job.id).await,
            Err(MarketError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates_in_insertion_order() {
        let service = service();
        let owner = employer();
        for i in 0..4 {
            service
                .create(&owner, draft(&format!("Rust role {}", i), &["rust"]))
                .await
                .unwrap();
        }
        service
            .create(&owner, draft("Gardener", &["outdoors"]))
            .await
            .unwrap();

        let filter = JobFilter {
            query: Some("rust".to_string()),
            tag: None,
        };
        let (jobs, pagination) = service
            .list(filter, PageRequest::new(1, 3).unwrap())
            .await
            .unwrap();

        assert_eq!(pagination.total_items, 4);
        assert_eq!(pagination.total_pages, 2);
        assert_eq!(
            jobs.iter().map(|j| j.title.clone()).collect::<Vec<_>>(),
            vec!["Rust role 0", "Rust role 1", "Rust role 2"]
        );
    }

    #[tokio::test]
    async fn test_share_message_renders_for_channel() {
        let service = service();
        let job = service
            .create(&employer(), draft("Engineer", &["rust"]))
            .await
            .unwrap();

        let telegram = service
            .share_message(&job.id, MessageChannel::Telegram)
            .await
            .unwrap();
        assert!(telegram.starts_with("Engineer at Acme (Oslo)"));
        assert!(telegram.contains("#rust"));

        let email = service
            .share_message(&job.id, MessageChannel::Email)
            .await
            .unwrap();
        assert!(email.starts_with("Subject: Engineer at Acme"));
    }
}

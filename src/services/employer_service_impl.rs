use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            CreateEmploymentRequest, EmploymentRequest, PageRequest, Pagination, Principal,
            RequestStatus,
        },
        value_objects::RecordId,
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::{EmployerService, NotificationService},
    },
};

use super::aggregate_locks::AggregateLocks;

/// Implementation of EmployerService. Status decisions notify the
/// requester through the notification service.
#[derive(Clone)]
pub struct EmployerServiceImpl {
    requests: Arc<dyn DocumentCollection<EmploymentRequest>>,
    notifications: Arc<dyn NotificationService>,
    locks: Arc<AggregateLocks>,
}

impl EmployerServiceImpl {
    pub fn new(
        requests: Arc<dyn DocumentCollection<EmploymentRequest>>,
        notifications: Arc<dyn NotificationService>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            requests,
            notifications,
            locks,
        }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<EmploymentRequest> {
        self.requests
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("business service request", id.as_str()))
    }
}

#[async_trait]
impl EmployerService for EmployerServiceImpl {
    async fn submit(
        &self,
        principal: &Principal,
        request: CreateEmploymentRequest,
    ) -> MarketResult<EmploymentRequest> {
        if request.company_name.trim().is_empty() {
            return Err(MarketError::validation("company name cannot be empty"));
        }
        if request.contact_email.trim().is_empty() {
            return Err(MarketError::validation("contact email cannot be empty"));
        }

        let stored = EmploymentRequest::new(principal.id.clone(), request);
        self.requests.insert(stored.clone()).await?;
        Ok(stored)
    }

    async fn get(&self, principal: &Principal, id: &RecordId) -> MarketResult<EmploymentRequest> {
        let request = self.load(id).await?;
        if !principal.may_manage(&request.requester_id) {
            return Err(MarketError::forbidden("view this request"));
        }
        Ok(request)
    }

    async fn list(
        &self,
        principal: &Principal,
        page: PageRequest,
    ) -> MarketResult<(Vec<EmploymentRequest>, Pagination)> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("list business service requests"));
        }

        let requests = self.requests.list().await?;
        Ok(page.paginate(requests))
    }

    async fn update_status(
        &self,
        principal: &Principal,
        id: &RecordId,
        status: RequestStatus,
    ) -> MarketResult<EmploymentRequest> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("decide business service requests"));
        }

        let _guard = self
            .locks
            .acquire(EmploymentRequest::COLLECTION, id.as_str())
            .await;

        let mut request = self.load(id).await?;
        request.status = status;
        if !self.requests.replace(&request).await? {
            return Err(MarketError::not_found(
                "business service request",
                id.as_str(),
            ));
        }

        // The decision is already persisted; a failed notification write
        // must not roll it back
        if let Err(e) = self
            .notifications
            .notify(
                &request.requester_id,
                format!("Business service request {}", status),
                format!(
                    "Your request for '{}' on behalf of {} was {}.",
                    request.service, request.company_name, status
                ),
            )
            .await
        {
            warn!(request_id = %request.id, error = %e, "failed to notify requester of decision");
        }

        Ok(request)
    }

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()> {
        let request = self.load(id).await?;
        if !principal.may_manage(&request.requester_id) {
            return Err(MarketError::forbidden("delete this request"));
        }

        if !self.requests.remove(id).await? {
            return Err(MarketError::not_found(
                "business service request",
                id.as_str(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::persistence::InMemoryCollection;
    use crate::domain::models::{Notification, Role};
    use crate::services::NotificationServiceImpl;

    struct Fixture {
        service: EmployerServiceImpl,
        notifications: Arc<InMemoryCollection<Notification>>,
    }

    fn fixture() -> Fixture {
        let notifications = Arc::new(InMemoryCollection::new());
        let locks = Arc::new(AggregateLocks::new());
        Fixture {
            service: EmployerServiceImpl::new(
                Arc::new(InMemoryCollection::new()),
                Arc::new(NotificationServiceImpl::new(
                    notifications.clone(),
                    locks.clone(),
                )),
                locks,
            ),
            notifications,
        }
    }

    fn employer() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Employer,
        }
    }

    fn admin() -> Principal {
        Principal {
            id: RecordId::generate(),
            role: Role::Admin,
        }
    }

    fn draft() -> CreateEmploymentRequest {
        CreateEmploymentRequest {
            company_name: "Acme".to_string(),
            contact_email: "hr@acme.example".to_string(),
            service: "payroll".to_string(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_submissions_start_pending() {
        let fx = fixture();
        let request = fx.service.submit(&employer(), draft()).await.unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[tokio::test]
    async fn test_only_requester_or_admin_can_view() {
        let fx = fixture();
        let requester = employer();
        let request = fx.service.submit(&requester, draft()).await.unwrap();

        let stranger = employer();
        let denied = fx.service.get(&stranger, &request.id).await;
        assert!(matches!(denied, Err(MarketError::Forbidden { .. })));

        assert!(fx.service.get(&requester, &request.id).await.is_ok());
        assert!(fx.service.get(&admin(), &request.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_status_decision_notifies_the_requester() {
        let fx = fixture();
        let requester = employer();
        let request = fx.service.submit(&requester, draft()).await.unwrap();

        let denied = fx
            .service
            .update_status(&requester, &request.id, RequestStatus::Approved)
            .await;
        assert!(matches!(denied, Err(MarketError::Forbidden { .. })));

        let decided = fx
            .service
            .update_status(&admin(), &request.id, RequestStatus::Approved)
            .await
            .unwrap();
        assert_eq!(decided.status, RequestStatus::Approved);

        let stored = fx.notifications.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].recipient_id, requester.id);
        assert!(stored[0].title.contains("approved"));
    }

    #[tokio::test]
    async fn test_admin_listing_and_requester_delete() {
        let fx = fixture();
        let requester = employer();
        let request = fx.service.submit(&requester, draft()).await.unwrap();

        let denied = fx.service.list(&requester, PageRequest::default()).await;
        assert!(matches!(denied, Err(MarketError::Forbidden { .. })));

        let (requests, pagination) = fx
            .service
            .list(&admin(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(pagination.total_items, 1);

        fx.service.delete(&requester, &request.id).await.unwrap();
        let gone = fx.service.get(&requester, &request.id).await;
        assert!(matches!(gone, Err(MarketError::NotFound { .. })));
    }
}

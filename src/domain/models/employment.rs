use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// Review status of a business-service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn parse(value: &str) -> Option<RequestStatus> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A company's request for business services, reviewed by admins
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRequest {
    pub id: RecordId,
    pub company_name: String,
    pub contact_email: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub status: RequestStatus,
    pub requester_id: RecordId,
    pub created_at: DateTime<Utc>,
}

impl EmploymentRequest {
    pub fn new(requester_id: RecordId, request: CreateEmploymentRequest) -> Self {
        Self {
            id: RecordId::generate(),
            company_name: request.company_name,
            contact_email: request.contact_email,
            service: request.service,
            message: request.message,
            status: RequestStatus::Pending,
            requester_id,
            created_at: Utc::now(),
        }
    }
}

/// Fields for submitting a business-service request
#[derive(Debug, Clone)]
pub struct CreateEmploymentRequest {
    pub company_name: String,
    pub contact_email: String,
    pub service: String,
    pub message: Option<String>,
}

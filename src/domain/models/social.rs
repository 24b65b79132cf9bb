use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
}

/// A friendship edge between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: RecordId,
    pub requester_id: RecordId,
    pub addressee_id: RecordId,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    pub fn new(requester_id: RecordId, addressee_id: RecordId) -> Self {
        Self {
            id: RecordId::generate(),
            requester_id,
            addressee_id,
            status: FriendshipStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn involves(&self, user_id: &RecordId) -> bool {
        &self.requester_id == user_id || &self.addressee_id == user_id
    }
}

/// A report filed against a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub id: RecordId,
    pub reporter_id: RecordId,
    pub reported_id: RecordId,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl UserReport {
    pub fn new(reporter_id: RecordId, reported_id: RecordId, reason: String) -> Self {
        Self {
            id: RecordId::generate(),
            reporter_id,
            reported_id,
            reason,
            created_at: Utc::now(),
        }
    }
}

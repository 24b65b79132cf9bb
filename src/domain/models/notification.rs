use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// An in-app notification for one recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    pub recipient_id: RecordId,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(recipient_id: RecordId, title: String, body: String) -> Self {
        Self {
            id: RecordId::generate(),
            recipient_id,
            title,
            body,
            read: false,
            created_at: Utc::now(),
        }
    }
}

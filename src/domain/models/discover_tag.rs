use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// A curated tag shown on the discover page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverTag {
    pub id: RecordId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DiscoverTag {
    pub fn new(request: CreateDiscoverTagRequest) -> Self {
        Self {
            id: RecordId::generate(),
            name: request.name,
            category: request.category,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: UpdateDiscoverTagRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
    }
}

/// Fields for a new discover tag
#[derive(Debug, Clone)]
pub struct CreateDiscoverTagRequest {
    pub name: String,
    pub category: Option<String>,
}

/// Partial update of a discover tag
#[derive(Debug, Clone, Default)]
pub struct UpdateDiscoverTagRequest {
    pub name: Option<String>,
    pub category: Option<String>,
}

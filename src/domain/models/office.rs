use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// A company office location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Office {
    pub fn new(request: CreateOfficeRequest) -> Self {
        Self {
            id: RecordId::generate(),
            name: request.name,
            address: request.address,
            city: request.city,
            country: request.country,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: UpdateOfficeRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(country) = update.country {
            self.country = Some(country);
        }
    }
}

/// Fields for a new office
#[derive(Debug, Clone)]
pub struct CreateOfficeRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: Option<String>,
}

/// Partial update of an office
#[derive(Debug, Clone, Default)]
pub struct UpdateOfficeRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

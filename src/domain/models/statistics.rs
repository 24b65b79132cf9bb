use serde::{Deserialize, Serialize};

/// Collection sizes for the admin overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatistics {
    pub users: u64,
    pub jobs: u64,
    pub offices: u64,
    pub discover_tags: u64,
    pub tournaments: u64,
    pub employment_requests: u64,
    pub notifications: u64,
    pub friendships: u64,
    pub user_reports: u64,
}

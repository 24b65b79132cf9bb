use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// A job posting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(owner_id: RecordId, request: CreateJobRequest) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::generate(),
            title: request.title,
            company: request.company,
            location: request.location,
            description: request.description,
            salary_range: request.salary_range,
            tags: request.tags,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow merge of the update; absent fields keep current values
    pub fn apply(&mut self, update: UpdateJobRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(company) = update.company {
            self.company = company;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(salary_range) = update.salary_range {
            self.salary_range = Some(salary_range);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields for a new posting
#[derive(Debug, Clone)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary_range: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update of a posting
#[derive(Debug, Clone, Default)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Search filter over the job board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Substring matched against title, company, location and description
    pub query: Option<String>,
    /// Substring matched against the tag list
    pub tag: Option<String>,
}

impl JobFilter {
    /// Check if this filter matches a job
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(query) = &self.query {
            let q = query.to_lowercase();
            let hit = job.title.to_lowercase().contains(&q)
                || job.company.to_lowercase().contains(&q)
                || job.location.to_lowercase().contains(&q)
                || job.description.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            let t = tag.to_lowercase();
            if !job.tags.iter().any(|x| x.to_lowercase().contains(&t)) {
                return false;
            }
        }

        true
    }

    /// Check if the filter matches everything
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.tag.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job::new(
            RecordId::generate(),
            CreateJobRequest {
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Oslo".to_string(),
                description: "Build marketplace services".to_string(),
                salary_range: None,
                tags: vec!["Rust".to_string(), "Backend".to_string()],
            },
        )
    }

    #[test]
    fn test_filter_query_is_case_insensitive() {
        let job = sample_job();
        let filter = JobFilter {
            query: Some("bAcKeNd".to_string()),
            tag: None,
        };
        assert!(filter.matches(&job));

        let miss = JobFilter {
            query: Some("frontend".to_string()),
            tag: None,
        };
        assert!(!miss.matches(&job));
    }

    #[test]
    fn test_filter_tag_substring() {
        let job = sample_job();
        let filter = JobFilter {
            query: None,
            tag: Some("rust".to_string()),
        };
        assert!(filter.matches(&job));

        let miss = JobFilter {
            query: None,
            tag: Some("python".to_string()),
        };
        assert!(!miss.matches(&job));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let job = sample_job();
        assert!(JobFilter::default().matches(&job));
        assert!(JobFilter::default().is_empty());
    }

    #[test]
    fn test_update_merges_shallowly() {
        let mut job = sample_job();
        let id = job.id.clone();
        job.apply(UpdateJobRequest {
            location: Some("Bergen".to_string()),
            ..Default::default()
        });
        assert_eq!(job.id, id);
        assert_eq!(job.location, "Bergen");
        assert_eq!(job.title, "Backend Engineer");
    }
}

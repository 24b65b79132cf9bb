use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file::FileAttachment;
use crate::domain::value_objects::{ItemId, RecordId};

/// Role attached to a request by the upstream auth middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employer,
    Member,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "employer" => Some(Role::Employer),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employer => "employer",
            Role::Member => "member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated caller, as attested by the upstream gateway.
/// This service never checks credentials itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: RecordId,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn can_post_jobs(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Employer)
    }

    /// Owner-or-admin rule applied to resource mutations
    pub fn may_manage(&self, owner_id: &RecordId) -> bool {
        self.is_admin() || &self.id == owner_id
    }
}

/// A marketplace user.
///
/// The resume sub-document does not exist until the first write touches one
/// of its slots; it is then created whole with the untouched slots empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<FileAttachment>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub resume: Option<Resume>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        Self {
            id: RecordId::generate(),
            full_name: request.full_name,
            email: request.email,
            role: request.role,
            avatar: None,
            resume: None,
            created_at: Utc::now(),
        }
    }

    /// The resume, created on first use with every slot empty
    pub fn resume_mut(&mut self) -> &mut Resume {
        self.resume.get_or_insert_with(Resume::new)
    }

    /// Case-insensitive substring match on the full name
    pub fn matches_name(&self, query: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Fields for registering a user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

/// Resume sub-document: every slot stays empty until its first write
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cv: Option<FileAttachment>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub projects: Option<Vec<ProjectItem>>,
}

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a project, initializing the list on first use
    pub fn add_project(&mut self, project: ProjectItem) {
        self.projects.get_or_insert_with(Vec::new).push(project);
    }

    pub fn project_mut(&mut self, id: &ItemId) -> Option<&mut ProjectItem> {
        self.projects.as_mut()?.iter_mut().find(|p| &p.id == id)
    }

    /// Remove exactly the matching project; false when no project matches
    pub fn remove_project(&mut self, id: &ItemId) -> bool {
        if let Some(projects) = self.projects.as_mut() {
            if let Some(idx) = projects.iter().position(|p| &p.id == id) {
                projects.remove(idx);
                return true;
            }
        }
        false
    }
}

/// Contact details slot of the resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
}

/// An entry in the resume's project list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: ItemId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
}

impl ProjectItem {
    pub fn new(request: CreateProjectRequest) -> Self {
        Self {
            id: ItemId::generate(),
            title: request.title,
            description: request.description,
            link: request.link,
        }
    }

    /// Shallow merge: fields present in the patch replace current values,
    /// absent fields stay, and the id is never rewritten.
    pub fn apply(&mut self, patch: UpdateProjectRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(link) = patch.link {
            self.link = Some(link);
        }
    }
}

/// Fields for a new project entry
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Partial project update
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{MarketError, MarketResult},
    models::{
        CreateDiscoverTagRequest, CreateEmploymentRequest, CreateJobRequest, CreateOfficeRequest,
        CreateProjectRequest, CreateTournamentRequest, CreateUserRequest, JobFilter, PageRequest,
        Pagination, RequestStatus, Role, UpdateDiscoverTagRequest, UpdateJobRequest,
        UpdateOfficeRequest, UpdateProjectRequest, UpdateTournamentRequest,
    },
    value_objects::{ItemId, RecordId},
};

/// Handler return type; both sides carry the envelope
pub type HandlerResult = Result<(StatusCode, Json<Envelope>), (StatusCode, Json<Envelope>)>;

/// Response envelope shared by every endpoint.
///
/// `data` is always present on the wire and null on errors and on
/// successes that carry no payload; `count` and `pagination` appear only
/// on list responses.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub outcome: &'static str,
    pub message: String,
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Envelope {
    /// Success without a payload
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: "success",
            message: message.into(),
            data: None,
            count: None,
            pagination: None,
        }
    }

    /// Success carrying one record
    pub fn with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::success(message)
        }
    }

    /// Success carrying a list; `count` is the number of returned items
    pub fn listing(message: impl Into<String>, data: serde_json::Value, count: u64) -> Self {
        Self {
            data: Some(data),
            count: Some(count),
            ..Self::success(message)
        }
    }

    /// Attach the pagination block to a listing
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Attach an affected-item count without a payload
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            outcome: "error",
            message: message.into(),
            data: None,
            count: None,
            pagination: None,
        }
    }
}

impl From<&MarketError> for StatusCode {
    fn from(error: &MarketError) -> Self {
        match error {
            MarketError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            MarketError::Forbidden { .. } => StatusCode::FORBIDDEN,
            MarketError::NotFound { .. } => StatusCode::NOT_FOUND,
            MarketError::Validation { .. } => StatusCode::BAD_REQUEST,
            MarketError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Map a domain failure onto its status code and error envelope
pub fn fail(error: MarketError) -> (StatusCode, Json<Envelope>) {
    let status = StatusCode::from(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, "request failed");
    }
    (status, Json(Envelope::error(error.to_string())))
}

/// Serialize a response payload
pub fn to_data<T: Serialize>(value: &T) -> Result<serde_json::Value, (StatusCode, Json<Envelope>)> {
    serde_json::to_value(value).map_err(|e| fail(MarketError::upstream("response encoding", e)))
}

/// Unwrap a JSON body, turning rejections into envelope-shaped 400s
pub fn require_json<T>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, (StatusCode, Json<Envelope>)> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(fail(MarketError::validation(format!(
            "invalid request body: {}",
            rejection
        )))),
    }
}

/// Validate a record id taken from a path segment
pub fn path_id(raw: String) -> Result<RecordId, (StatusCode, Json<Envelope>)> {
    RecordId::new(raw).map_err(|e| fail(MarketError::validation(format!("invalid id: {}", e))))
}

/// Validate a list-item id taken from a path segment
pub fn path_item_id(raw: String) -> Result<ItemId, (StatusCode, Json<Envelope>)> {
    ItemId::new(raw).map_err(|e| fail(MarketError::validation(format!("invalid item id: {}", e))))
}

fn parse_count(field: &'static str, raw: Option<&str>) -> MarketResult<Option<u64>> {
    match raw {
        None => Ok(None),
        Some(text) => text.parse::<u64>().map(Some).map_err(|_| {
            MarketError::validation(format!("{} must be a positive integer", field))
        }),
    }
}

/// Pagination query parameters, kept as raw strings so malformed values
/// produce an envelope-shaped 400 instead of an extractor rejection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn window(&self) -> MarketResult<PageRequest> {
        PageRequest::from_query(
            parse_count("page", self.page.as_deref())?,
            parse_count("limit", self.limit.as_deref())?,
        )
    }
}

/// Directory search parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchQuery {
    pub full_name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl UserSearchQuery {
    pub fn window(&self) -> MarketResult<PageRequest> {
        PageRequest::from_query(
            parse_count("page", self.page.as_deref())?,
            parse_count("limit", self.limit.as_deref())?,
        )
    }
}

/// Job board listing parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    pub query: Option<String>,
    pub tag: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl JobListQuery {
    pub fn window(&self) -> MarketResult<PageRequest> {
        PageRequest::from_query(
            parse_count("page", self.page.as_deref())?,
            parse_count("limit", self.limit.as_deref())?,
        )
    }

    pub fn filter(&self) -> JobFilter {
        JobFilter {
            query: self.query.clone(),
            tag: self.tag.clone(),
        }
    }
}

/// Share channel selector
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareQuery {
    pub channel: Option<String>,
}

/// Target selector for banner image removal
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveImageQuery {
    pub url: Option<String>,
}

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<RegisterUserDto> for CreateUserRequest {
    type Error = MarketError;

    fn try_from(dto: RegisterUserDto) -> Result<Self, Self::Error> {
        let role = Role::parse(&dto.role).ok_or_else(|| {
            MarketError::validation(format!(
                "unknown role '{}', expected admin, employer or member",
                dto.role
            ))
        })?;

        Ok(CreateUserRequest {
            full_name: dto.full_name,
            email: dto.email,
            role,
        })
    }
}

/// Report payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUserDto {
    pub reason: String,
}

/// New resume project payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl From<CreateProjectDto> for CreateProjectRequest {
    fn from(dto: CreateProjectDto) -> Self {
        CreateProjectRequest {
            title: dto.title,
            description: dto.description,
            link: dto.link,
        }
    }
}

/// Partial resume project payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl From<UpdateProjectDto> for UpdateProjectRequest {
    fn from(dto: UpdateProjectDto) -> Self {
        UpdateProjectRequest {
            title: dto.title,
            description: dto.description,
            link: dto.link,
        }
    }
}

/// New job posting payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary_range: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateJobDto> for CreateJobRequest {
    fn from(dto: CreateJobDto) -> Self {
        CreateJobRequest {
            title: dto.title,
            company: dto.company,
            location: dto.location,
            description: dto.description,
            salary_range: dto.salary_range,
            tags: dto.tags,
        }
    }
}

/// Partial job posting payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl From<UpdateJobDto> for UpdateJobRequest {
    fn from(dto: UpdateJobDto) -> Self {
        UpdateJobRequest {
            title: dto.title,
            company: dto.company,
            location: dto.location,
            description: dto.description,
            salary_range: dto.salary_range,
            tags: dto.tags,
        }
    }
}

/// New office payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficeDto {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: Option<String>,
}

impl From<CreateOfficeDto> for CreateOfficeRequest {
    fn from(dto: CreateOfficeDto) -> Self {
        CreateOfficeRequest {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            country: dto.country,
        }
    }
}

/// Partial office payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfficeDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<UpdateOfficeDto> for UpdateOfficeRequest {
    fn from(dto: UpdateOfficeDto) -> Self {
        UpdateOfficeRequest {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            country: dto.country,
        }
    }
}

/// New discover tag payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiscoverTagDto {
    pub name: String,
    pub category: Option<String>,
}

impl From<CreateDiscoverTagDto> for CreateDiscoverTagRequest {
    fn from(dto: CreateDiscoverTagDto) -> Self {
        CreateDiscoverTagRequest {
            name: dto.name,
            category: dto.category,
        }
    }
}

/// Partial discover tag payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiscoverTagDto {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl From<UpdateDiscoverTagDto> for UpdateDiscoverTagRequest {
    fn from(dto: UpdateDiscoverTagDto) -> Self {
        UpdateDiscoverTagRequest {
            name: dto.name,
            category: dto.category,
        }
    }
}

/// New tournament payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentDto {
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub prize: Option<String>,
}

impl From<CreateTournamentDto> for CreateTournamentRequest {
    fn from(dto: CreateTournamentDto) -> Self {
        CreateTournamentRequest {
            name: dto.name,
            description: dto.description,
            starts_at: dto.starts_at,
            prize: dto.prize,
        }
    }
}

/// Partial tournament payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournamentDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub prize: Option<String>,
}

impl From<UpdateTournamentDto> for UpdateTournamentRequest {
    fn from(dto: UpdateTournamentDto) -> Self {
        UpdateTournamentRequest {
            name: dto.name,
            description: dto.description,
            starts_at: dto.starts_at,
            prize: dto.prize,
        }
    }
}

/// Business-service request payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessServiceDto {
    pub company_name: String,
    pub contact_email: String,
    pub service: String,
    pub message: Option<String>,
}

impl From<CreateBusinessServiceDto> for CreateEmploymentRequest {
    fn from(dto: CreateBusinessServiceDto) -> Self {
        CreateEmploymentRequest {
            company_name: dto.company_name,
            contact_email: dto.contact_email,
            service: dto.service,
            message: dto.message,
        }
    }
}

/// Review decision payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    pub status: String,
}

impl TryFrom<UpdateStatusDto> for RequestStatus {
    type Error = MarketError;

    fn try_from(dto: UpdateStatusDto) -> Result<Self, Self::Error> {
        RequestStatus::parse(&dto.status).ok_or_else(|| {
            MarketError::validation(format!(
                "unknown status '{}', expected pending, approved or rejected",
                dto.status
            ))
        })
    }
}

/// Banner image relocation payload. Indexes arrive signed so negative
/// values fail validation instead of deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveImageDto {
    pub old_index: i64,
    pub new_index: i64,
}

impl MoveImageDto {
    pub fn indexes(&self) -> MarketResult<(usize, usize)> {
        let old_index = usize::try_from(self.old_index)
            .map_err(|_| MarketError::validation("oldIndex must not be negative"))?;
        let new_index = usize::try_from(self.new_index)
            .map_err(|_| MarketError::validation("newIndex must not be negative"))?;
        Ok((old_index, new_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serializes_null_data() {
        let json = serde_json::to_value(Envelope::success("done")).unwrap();
        assert_eq!(json["outcome"], "success");
        assert_eq!(json["message"], "done");
        assert!(json["data"].is_null());
        assert!(json.get("count").is_none());
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn test_listing_envelope_carries_count_and_pagination() {
        let envelope = Envelope::listing("items", serde_json::json!([1, 2]), 2).with_pagination(
            Pagination {
                page: 1,
                limit: 10,
                total_items: 2,
                total_pages: 1,
            },
        );
        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["pagination"]["totalItems"], 2);
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(Envelope::error("nope")).unwrap();
        assert_eq!(json["outcome"], "error");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_status_codes_per_error_kind() {
        assert_eq!(
            StatusCode::from(&MarketError::validation("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StatusCode::from(&MarketError::not_found("user", "u1")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StatusCode::from(&MarketError::forbidden("x")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            StatusCode::from(&MarketError::Unauthenticated {
                reason: "x".to_string()
            }),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            StatusCode::from(&MarketError::upstream("db", "boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_page_query_defaults_and_rejects_garbage() {
        let window = PageQuery::default().window().unwrap();
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, 10);

        let bad = PageQuery {
            page: Some("abc".to_string()),
            limit: None,
        };
        assert!(bad.window().is_err());

        let negative = PageQuery {
            page: Some("-1".to_string()),
            limit: None,
        };
        assert!(negative.window().is_err());
    }

    #[test]
    fn test_register_dto_rejects_unknown_role() {
        let dto = RegisterUserDto {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "wizard".to_string(),
        };
        assert!(CreateUserRequest::try_from(dto).is_err());

        let dto = RegisterUserDto {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "Employer".to_string(),
        };
        let request = CreateUserRequest::try_from(dto).unwrap();
        assert_eq!(request.role, Role::Employer);
    }

    #[test]
    fn test_move_dto_rejects_negative_indexes() {
        let dto = MoveImageDto {
            old_index: -1,
            new_index: 0,
        };
        assert!(dto.indexes().is_err());

        let dto = MoveImageDto {
            old_index: 2,
            new_index: 0,
        };
        assert_eq!(dto.indexes().unwrap(), (2, 0));
    }
}

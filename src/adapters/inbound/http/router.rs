use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::dto::Envelope;
use super::handlers::{
    add_project, append_banner_images, create_discover_tag, create_job, create_office,
    create_tournament, delete_avatar, delete_business_service, delete_cv, delete_discover_tag,
    delete_job, delete_notification, delete_office, delete_project, delete_tournament, get_banner,
    get_business_service, get_contact, get_cv, get_job, get_office, get_tournament,
    join_tournament, list_business_services, list_discover_tags, list_friends, list_jobs,
    list_notifications, list_offices, list_participants, list_projects, list_tournaments,
    mark_notification_read, move_banner_image, my_profile, register_user, remove_banner_image,
    remove_participant, report_user, request_friend, search_users, set_avatar, set_contact,
    set_cv, share_job, statistics_overview, submit_business_service, update_business_service_status,
    update_discover_tag, update_job, update_office, update_project, update_tournament,
    upload_message_attachment,
};
use std::sync::Arc;

use crate::ports::services::{
    BannerService, DiscoverTagService, EmployerService, JobService, MessagingService,
    NotificationService, OfficeService, ResumeService, StatisticsService, TournamentService,
    UserService,
};

/// Multipart bodies above this size are rejected before the handler runs
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub resume_service: Arc<dyn ResumeService>,
    pub job_service: Arc<dyn JobService>,
    pub office_service: Arc<dyn OfficeService>,
    pub discover_tag_service: Arc<dyn DiscoverTagService>,
    pub banner_service: Arc<dyn BannerService>,
    pub tournament_service: Arc<dyn TournamentService>,
    pub employer_service: Arc<dyn EmployerService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub statistics_service: Arc<dyn StatisticsService>,
    pub messaging_service: Arc<dyn MessagingService>,
}

async fn health() -> (StatusCode, Json<Envelope>) {
    (StatusCode::OK, Json(Envelope::success("Service is healthy")))
}

async fn route_not_found() -> (StatusCode, Json<Envelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::error("Route not found")),
    )
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Users and social graph
        .route("/users", post(register_user))
        .route("/users", get(search_users))
        .route("/users/me", get(my_profile))
        .route("/users/avatar", put(set_avatar))
        .route("/users/avatar", delete(delete_avatar))
        .route("/users/{id}/report", post(report_user))
        .route("/users/{id}/friend", post(request_friend))
        .route("/users/friends", get(list_friends))
        // Resume editor
        .route("/users/resume/contact", put(set_contact))
        .route("/users/resume/contact", get(get_contact))
        .route("/users/resume/projects", post(add_project))
        .route("/users/resume/projects", get(list_projects))
        .route("/users/resume/projects/{item_id}", patch(update_project))
        .route("/users/resume/projects/{item_id}", delete(delete_project))
        .route("/users/resume/cv", put(set_cv))
        .route("/users/resume/cv", get(get_cv))
        .route("/users/resume/cv", delete(delete_cv))
        // Job board
        .route("/jobs", post(create_job))
        .route("/jobs", get(list_jobs))
        .route("/jobs/{id}", get(get_job))
        .route("/jobs/{id}/share", get(share_job))
        .route("/jobs/{id}", patch(update_job))
        .route("/jobs/{id}", delete(delete_job))
        // Office directory
        .route("/offices", post(create_office))
        .route("/offices", get(list_offices))
        .route("/offices/{id}", get(get_office))
        .route("/offices/{id}", patch(update_office))
        .route("/offices/{id}", delete(delete_office))
        // Discover tags
        .route("/discoverTags", post(create_discover_tag))
        .route("/discoverTags", get(list_discover_tags))
        .route("/discoverTags/{id}", patch(update_discover_tag))
        .route("/discoverTags/{id}", delete(delete_discover_tag))
        // Banner carousel
        .route("/banner", get(get_banner))
        .route("/banner/images", post(append_banner_images))
        .route("/banner/images", delete(remove_banner_image))
        .route("/banner/images/move", patch(move_banner_image))
        // Tournaments
        .route("/tournaments", post(create_tournament))
        .route("/tournaments", get(list_tournaments))
        .route("/tournaments/{id}", get(get_tournament))
        .route("/tournaments/{id}", patch(update_tournament))
        .route("/tournaments/{id}", delete(delete_tournament))
        .route("/tournaments/{id}/participants", post(join_tournament))
        .route("/tournaments/{id}/participants", get(list_participants))
        .route(
            "/tournaments/{id}/participants/{participant_id}",
            delete(remove_participant),
        )
        // Business services
        .route("/business-services", post(submit_business_service))
        .route("/business-services", get(list_business_services))
        .route("/business-services/{id}", get(get_business_service))
        .route(
            "/business-services/{id}/status",
            patch(update_business_service_status),
        )
        .route("/business-services/{id}", delete(delete_business_service))
        // Notifications
        .route("/notifications", get(list_notifications))
        .route("/notifications/{id}/read", patch(mark_notification_read))
        .route("/notifications/{id}", delete(delete_notification))
        // Messaging and statistics
        .route("/messages/attachments", post(upload_message_attachment))
        .route("/statistics", get(statistics_overview))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

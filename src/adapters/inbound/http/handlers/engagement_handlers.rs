use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::inbound::http::dto::{
    fail, path_id, to_data, Envelope, HandlerResult, PageQuery,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::Principal;

pub async fn list_notifications(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<PageQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (notifications, pagination) = state
        .notification_service
        .list_for(&principal.id, window)
        .await
        .map_err(fail)?;

    let count = notifications.len() as u64;
    let data = to_data(&notifications)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Notifications retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    let notification = state
        .notification_service
        .mark_read(&principal, &id)
        .await
        .map_err(fail)?;
    let data = to_data(&notification)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Notification marked as read", data)),
    ))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    state
        .notification_service
        .delete(&principal, &id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Notification deleted successfully")),
    ))
}

/// Admin overview counters
pub async fn statistics_overview(
    State(state): State<AppState>,
    principal: Principal,
) -> HandlerResult {
    let statistics = state
        .statistics_service
        .overview(&principal)
        .await
        .map_err(fail)?;
    let data = to_data(&statistics)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Statistics retrieved successfully", data)),
    ))
}

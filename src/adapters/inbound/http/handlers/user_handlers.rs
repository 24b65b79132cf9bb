use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::multipart::read_first_file;
use crate::adapters::inbound::http::dto::{
    fail, path_id, require_json, to_data, Envelope, HandlerResult, RegisterUserDto, ReportUserDto,
    UserSearchQuery,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::{CreateUserRequest, Principal};

/// Open registration; every other endpoint trusts the gateway headers
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let request = CreateUserRequest::try_from(dto).map_err(fail)?;

    let user = state.user_service.register(request).await.map_err(fail)?;
    let data = to_data(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("User registered successfully", data)),
    ))
}

/// Directory search over full names
pub async fn search_users(
    State(state): State<AppState>,
    _principal: Principal,
    Query(query): Query<UserSearchQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (users, pagination) = state
        .user_service
        .search(query.full_name.clone(), window)
        .await
        .map_err(fail)?;

    let count = users.len() as u64;
    let data = to_data(&users)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Users retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn my_profile(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    let user = state
        .user_service
        .profile(&principal.id)
        .await
        .map_err(fail)?;
    let data = to_data(&user)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Profile retrieved successfully", data)),
    ))
}

pub async fn set_avatar(
    State(state): State<AppState>,
    principal: Principal,
    mut multipart: Multipart,
) -> HandlerResult {
    let upload = read_first_file(&mut multipart).await.map_err(fail)?;
    let attachment = state
        .user_service
        .set_avatar(&principal.id, upload)
        .await
        .map_err(fail)?;
    let data = to_data(&attachment)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Avatar updated successfully", data)),
    ))
}

pub async fn delete_avatar(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    state
        .user_service
        .delete_avatar(&principal.id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Avatar removed successfully")),
    ))
}

pub async fn report_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<ReportUserDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let reported_id = path_id(id)?;

    let report = state
        .user_service
        .report_user(&principal.id, &reported_id, dto.reason)
        .await
        .map_err(fail)?;
    let data = to_data(&report)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("User reported successfully", data)),
    ))
}

pub async fn request_friend(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let addressee_id = path_id(id)?;

    let friendship = state
        .user_service
        .request_friendship(&principal.id, &addressee_id)
        .await
        .map_err(fail)?;
    let data = to_data(&friendship)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Friend request sent successfully", data)),
    ))
}

pub async fn list_friends(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    let friendships = state
        .user_service
        .list_friendships(&principal.id)
        .await
        .map_err(fail)?;

    let count = friendships.len() as u64;
    let data = to_data(&friendships)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::listing(
            "Friendships retrieved successfully",
            data,
            count,
        )),
    ))
}

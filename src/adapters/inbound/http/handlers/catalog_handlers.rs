use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::inbound::http::dto::{
    fail, path_id, require_json, to_data, CreateDiscoverTagDto, CreateOfficeDto, Envelope,
    HandlerResult, PageQuery, UpdateDiscoverTagDto, UpdateOfficeDto,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::Principal;

pub async fn create_office(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateOfficeDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;

    let office = state
        .office_service
        .create(&principal, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&office)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Office created successfully", data)),
    ))
}

pub async fn list_offices(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (offices, pagination) = state.office_service.list(window).await.map_err(fail)?;

    let count = offices.len() as u64;
    let data = to_data(&offices)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Offices retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn get_office(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let id = path_id(id)?;

    let office = state.office_service.get(&id).await.map_err(fail)?;
    let data = to_data(&office)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Office retrieved successfully", data)),
    ))
}

pub async fn update_office(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOfficeDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let id = path_id(id)?;

    let office = state
        .office_service
        .update(&principal, &id, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&office)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Office updated successfully", data)),
    ))
}

pub async fn delete_office(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    state
        .office_service
        .delete(&principal, &id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Office deleted successfully")),
    ))
}

pub async fn create_discover_tag(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateDiscoverTagDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;

    let tag = state
        .discover_tag_service
        .create(&principal, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&tag)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Discover tag created successfully", data)),
    ))
}

pub async fn list_discover_tags(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (tags, pagination) = state.discover_tag_service.list(window).await.map_err(fail)?;

    let count = tags.len() as u64;
    let data = to_data(&tags)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Discover tags retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn update_discover_tag(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDiscoverTagDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let id = path_id(id)?;

    let tag = state
        .discover_tag_service
        .update(&principal, &id, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&tag)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Discover tag updated successfully", data)),
    ))
}

pub async fn delete_discover_tag(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    state
        .discover_tag_service
        .delete(&principal, &id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Discover tag deleted successfully")),
    ))
}

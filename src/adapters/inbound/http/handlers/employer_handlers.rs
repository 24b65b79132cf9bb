use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::inbound::http::dto::{
    fail, path_id, require_json, to_data, CreateBusinessServiceDto, Envelope, HandlerResult,
    PageQuery, UpdateStatusDto,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::{Principal, RequestStatus};

pub async fn submit_business_service(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateBusinessServiceDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;

    let request = state
        .employer_service
        .submit(&principal, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&request)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(
            "Business service request submitted successfully",
            data,
        )),
    ))
}

pub async fn list_business_services(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<PageQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (requests, pagination) = state
        .employer_service
        .list(&principal, window)
        .await
        .map_err(fail)?;

    let count = requests.len() as u64;
    let data = to_data(&requests)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Business service requests retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn get_business_service(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    let request = state
        .employer_service
        .get(&principal, &id)
        .await
        .map_err(fail)?;
    let data = to_data(&request)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            "Business service request retrieved successfully",
            data,
        )),
    ))
}

/// Admin decision on a pending request
pub async fn update_business_service_status(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let id = path_id(id)?;
    let status = RequestStatus::try_from(dto).map_err(fail)?;

    let request = state
        .employer_service
        .update_status(&principal, &id, status)
        .await
        .map_err(fail)?;
    let data = to_data(&request)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            "Business service request updated successfully",
            data,
        )),
    ))
}

pub async fn delete_business_service(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    state
        .employer_service
        .delete(&principal, &id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success(
            "Business service request deleted successfully",
        )),
    ))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::inbound::http::dto::{
    fail, path_id, require_json, to_data, CreateJobDto, Envelope, HandlerResult, JobListQuery,
    ShareQuery, UpdateJobDto,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::errors::MarketError;
use crate::domain::models::{MessageChannel, Principal};

pub async fn create_job(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateJobDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;

    let job = state
        .job_service
        .create(&principal, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&job)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Job posted successfully", data)),
    ))
}

/// Public listing with optional text and tag filters
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (jobs, pagination) = state
        .job_service
        .list(query.filter(), window)
        .await
        .map_err(fail)?;

    let count = jobs.len() as u64;
    let data = to_data(&jobs)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Jobs retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn get_job(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let id = path_id(id)?;

    let job = state.job_service.get(&id).await.map_err(fail)?;
    let data = to_data(&job)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Job retrieved successfully", data)),
    ))
}

/// Render the outbound share message for a posting
pub async fn share_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ShareQuery>,
) -> HandlerResult {
    let id = path_id(id)?;
    let channel = query
        .channel
        .as_deref()
        .ok_or_else(|| fail(MarketError::validation("channel query parameter is required")))?;
    let channel = MessageChannel::parse(channel).ok_or_else(|| {
        fail(MarketError::validation(format!(
            "unknown channel '{}', expected telegram or email",
            channel
        )))
    })?;

    let message = state
        .job_service
        .share_message(&id, channel)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            "Share message rendered successfully",
            serde_json::Value::String(message),
        )),
    ))
}

pub async fn update_job(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<UpdateJobDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let id = path_id(id)?;

    let job = state
        .job_service
        .update(&principal, &id, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&job)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Job updated successfully", data)),
    ))
}

pub async fn delete_job(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    state
        .job_service
        .delete(&principal, &id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Job deleted successfully")),
    ))
}

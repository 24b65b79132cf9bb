use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::multipart::read_first_file;
use crate::adapters::inbound::http::dto::{
    fail, path_item_id, require_json, to_data, CreateProjectDto, Envelope, HandlerResult,
    UpdateProjectDto,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::{ContactInfo, Principal};

pub async fn set_contact(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<ContactInfo>, JsonRejection>,
) -> HandlerResult {
    let contact = require_json(payload)?;

    let saved = state
        .resume_service
        .set_contact(&principal.id, contact)
        .await
        .map_err(fail)?;
    let data = to_data(&saved)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Contact details saved successfully", data)),
    ))
}

pub async fn get_contact(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    let contact = state
        .resume_service
        .get_contact(&principal.id)
        .await
        .map_err(fail)?;
    let data = to_data(&contact)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            "Contact details retrieved successfully",
            data,
        )),
    ))
}

pub async fn add_project(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateProjectDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;

    let project = state
        .resume_service
        .add_project(&principal.id, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&project)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Project added successfully", data)),
    ))
}

pub async fn list_projects(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    let projects = state
        .resume_service
        .list_projects(&principal.id)
        .await
        .map_err(fail)?;

    let count = projects.len() as u64;
    let data = to_data(&projects)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::listing(
            "Projects retrieved successfully",
            data,
            count,
        )),
    ))
}

pub async fn update_project(
    State(state): State<AppState>,
    principal: Principal,
    Path(item_id): Path<String>,
    payload: Result<Json<UpdateProjectDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let item_id = path_item_id(item_id)?;

    let project = state
        .resume_service
        .update_project(&principal.id, &item_id, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&project)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Project updated successfully", data)),
    ))
}

pub async fn delete_project(
    State(state): State<AppState>,
    principal: Principal,
    Path(item_id): Path<String>,
) -> HandlerResult {
    let item_id = path_item_id(item_id)?;

    state
        .resume_service
        .delete_project(&principal.id, &item_id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Project removed successfully")),
    ))
}

pub async fn set_cv(
    State(state): State<AppState>,
    principal: Principal,
    mut multipart: Multipart,
) -> HandlerResult {
    let upload = read_first_file(&mut multipart).await.map_err(fail)?;

    let attachment = state
        .resume_service
        .set_cv(&principal.id, upload)
        .await
        .map_err(fail)?;
    let data = to_data(&attachment)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("CV uploaded successfully", data)),
    ))
}

pub async fn get_cv(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    let attachment = state
        .resume_service
        .get_cv(&principal.id)
        .await
        .map_err(fail)?;
    let data = to_data(&attachment)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("CV retrieved successfully", data)),
    ))
}

pub async fn delete_cv(State(state): State<AppState>, principal: Principal) -> HandlerResult {
    state
        .resume_service
        .delete_cv(&principal.id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("CV removed successfully")),
    ))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::multipart::read_all_files;
use crate::adapters::inbound::http::dto::{
    fail, require_json, to_data, Envelope, HandlerResult, MoveImageDto, RemoveImageQuery,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::errors::MarketError;
use crate::domain::models::Principal;

pub async fn get_banner(State(state): State<AppState>) -> HandlerResult {
    let images = state.banner_service.list_images().await.map_err(fail)?;

    let count = images.len() as u64;
    let data = to_data(&images)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::listing(
            "Banner images retrieved successfully",
            data,
            count,
        )),
    ))
}

/// Append every file field of the upload to the carousel
pub async fn append_banner_images(
    State(state): State<AppState>,
    principal: Principal,
    mut multipart: Multipart,
) -> HandlerResult {
    let uploads = read_all_files(&mut multipart).await.map_err(fail)?;

    let images = state
        .banner_service
        .append_images(&principal, uploads)
        .await
        .map_err(fail)?;

    let count = images.len() as u64;
    let data = to_data(&images)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::listing(
            "Banner images added successfully",
            data,
            count,
        )),
    ))
}

/// Remove every image whose public URL matches the query target
pub async fn remove_banner_image(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<RemoveImageQuery>,
) -> HandlerResult {
    let url = query
        .url
        .as_deref()
        .ok_or_else(|| fail(MarketError::validation("url query parameter is required")))?;

    let removed = state
        .banner_service
        .remove_image(&principal, url)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Banner images removed successfully").with_count(removed as u64)),
    ))
}

pub async fn move_banner_image(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<MoveImageDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let (old_index, new_index) = dto.indexes().map_err(fail)?;

    let images = state
        .banner_service
        .move_image(&principal, old_index, new_index)
        .await
        .map_err(fail)?;

    let count = images.len() as u64;
    let data = to_data(&images)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::listing(
            "Banner image moved successfully",
            data,
            count,
        )),
    ))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::inbound::http::dto::{
    fail, path_id, path_item_id, require_json, to_data, CreateTournamentDto, Envelope,
    HandlerResult, PageQuery, UpdateTournamentDto,
};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::Principal;

pub async fn create_tournament(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateTournamentDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;

    let tournament = state
        .tournament_service
        .create(&principal, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&tournament)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Tournament created successfully", data)),
    ))
}

pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult {
    let window = query.window().map_err(fail)?;
    let (tournaments, pagination) = state.tournament_service.list(window).await.map_err(fail)?;

    let count = tournaments.len() as u64;
    let data = to_data(&tournaments)?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::listing("Tournaments retrieved successfully", data, count)
                .with_pagination(pagination),
        ),
    ))
}

pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    let tournament = state.tournament_service.get(&id).await.map_err(fail)?;
    let data = to_data(&tournament)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Tournament retrieved successfully", data)),
    ))
}

pub async fn update_tournament(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTournamentDto>, JsonRejection>,
) -> HandlerResult {
    let dto = require_json(payload)?;
    let id = path_id(id)?;

    let tournament = state
        .tournament_service
        .update(&principal, &id, dto.into())
        .await
        .map_err(fail)?;
    let data = to_data(&tournament)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::with_data("Tournament updated successfully", data)),
    ))
}

pub async fn delete_tournament(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    state
        .tournament_service
        .delete(&principal, &id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Tournament deleted successfully")),
    ))
}

/// Join as the calling user
pub async fn join_tournament(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    let participant = state
        .tournament_service
        .join(&principal, &id)
        .await
        .map_err(fail)?;
    let data = to_data(&participant)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Tournament joined successfully", data)),
    ))
}

pub async fn list_participants(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = path_id(id)?;

    let participants = state
        .tournament_service
        .list_participants(&id)
        .await
        .map_err(fail)?;

    let count = participants.len() as u64;
    let data = to_data(&participants)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::listing(
            "Participants retrieved successfully",
            data,
            count,
        )),
    ))
}

pub async fn remove_participant(
    State(state): State<AppState>,
    principal: Principal,
    Path((id, participant_id)): Path<(String, String)>,
) -> HandlerResult {
    let id = path_id(id)?;
    let participant_id = path_item_id(participant_id)?;

    state
        .tournament_service
        .remove_participant(&principal, &id, &participant_id)
        .await
        .map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success("Participant removed successfully")),
    ))
}

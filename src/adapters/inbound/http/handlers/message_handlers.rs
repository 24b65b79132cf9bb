use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use super::multipart::read_first_file;
use crate::adapters::inbound::http::dto::{fail, to_data, Envelope, HandlerResult};
use crate::adapters::inbound::http::router::AppState;
use crate::domain::models::Principal;

/// Store an attachment that an outbound message will reference
pub async fn upload_message_attachment(
    State(state): State<AppState>,
    _principal: Principal,
    mut multipart: Multipart,
) -> HandlerResult {
    let upload = read_first_file(&mut multipart).await.map_err(fail)?;

    let attachment = state
        .messaging_service
        .upload_attachment(upload)
        .await
        .map_err(fail)?;
    let data = to_data(&attachment)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Attachment uploaded successfully", data)),
    ))
}

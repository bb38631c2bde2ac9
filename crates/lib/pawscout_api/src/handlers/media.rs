//! Media upload and delete handlers. Mounted behind `require_admin`.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use pawscout_core::media::{ANIMALS_FOLDER, MAX_FILES_PER_UPLOAD, UploadedMedia};
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{MediaDeleteRequest, MediaDeleteResponse};
use crate::services::media;

/// `POST /media/upload`: one file in the `file` field.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadedMedia>)> {
    let host = media::host(&state)?;
    let uploads = media::read_uploads(&mut multipart, "file", 1).await?;
    let uploaded = media::upload_all(host.as_ref(), uploads, ANIMALS_FOLDER)
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("media host returned no result".into()))?;
    Ok((StatusCode::CREATED, Json(uploaded)))
}

/// `POST /media/upload-multiple`: up to ten files in `files` fields.
pub async fn upload_multiple_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Vec<UploadedMedia>>)> {
    let host = media::host(&state)?;
    let uploads = media::read_uploads(&mut multipart, "files", MAX_FILES_PER_UPLOAD).await?;
    let uploaded = media::upload_all(host.as_ref(), uploads, ANIMALS_FOLDER).await?;
    Ok((StatusCode::CREATED, Json(uploaded)))
}

/// `DELETE /media/delete`
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(body): Json<MediaDeleteRequest>,
) -> AppResult<Json<MediaDeleteResponse>> {
    let host = media::host(&state)?;
    if body.public_id.trim().is_empty() {
        return Err(AppError::Validation("public_id cannot be empty".into()));
    }
    host.destroy(&body.public_id, body.resource_type).await?;
    info!(public_id = %body.public_id, "media deleted");
    Ok(Json(MediaDeleteResponse {
        message: "Media deleted successfully".into(),
        public_id: body.public_id,
    }))
}

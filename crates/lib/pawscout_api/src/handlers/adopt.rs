//! Adoption application handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use pawscout_core::models::adoption::{AdoptionApplication, AdoptionInput};
use pawscout_core::queries;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::models::SuccessResponse;

/// `POST /adopt/{animal_id}`: the animal comes from the path, never the body.
pub async fn submit_application_handler(
    State(state): State<AppState>,
    Path(animal_id): Path<i64>,
    Json(body): Json<AdoptionInput>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    if !queries::animals::exists(&state.pool, animal_id).await? {
        return Err(AppError::NotFound("Animal not found".into()));
    }
    body.validate()?;
    let application = queries::adoptions::create(&state.pool, animal_id, &body).await?;
    info!(application_id = application.id, animal_id, "adoption application received");
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(
            "Adoption application submitted successfully",
        )),
    ))
}

/// `GET /adopt/{id}`
pub async fn get_application_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<AdoptionApplication>> {
    let application = queries::adoptions::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".into()))?;
    Ok(Json(application))
}

//! Volunteer application handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use pawscout_core::models::volunteer::{Volunteer, VolunteerInput};
use pawscout_core::queries;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::models::{MessageResponse, SuccessResponse};

#[derive(Debug, Serialize)]
pub struct VolunteerList {
    pub volunteers: Vec<Volunteer>,
}

fn duplicate_email() -> AppError {
    AppError::Conflict("Email already registered".into())
}

fn duplicate_phone() -> AppError {
    AppError::Conflict("Phone number already registered".into())
}

/// `POST /volunteers`
pub async fn submit_volunteer_handler(
    State(state): State<AppState>,
    Json(body): Json<VolunteerInput>,
) -> AppResult<Json<SuccessResponse>> {
    if queries::volunteers::email_exists(&state.pool, &body.email).await? {
        return Err(duplicate_email());
    }
    if queries::volunteers::phone_exists(&state.pool, &body.phone).await? {
        return Err(duplicate_phone());
    }
    body.validate()?;
    let volunteer = queries::volunteers::create(&state.pool, &body)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => duplicate_email(),
            other => other,
        })?;
    info!(volunteer_id = volunteer.id, "volunteer application received");
    Ok(Json(SuccessResponse::new(
        "Volunteer form successfully submitted",
    )))
}

/// `GET /volunteers`
pub async fn list_volunteers_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<VolunteerList>> {
    let volunteers = queries::volunteers::list(&state.pool).await?;
    Ok(Json(VolunteerList { volunteers }))
}

/// `GET /volunteers/{id}`
pub async fn get_volunteer_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Volunteer>> {
    Ok(Json(load(&state, id).await?))
}

/// `PUT /volunteers/{id}`: full replace; uniqueness is re-checked only for changed contact fields.
pub async fn update_volunteer_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<VolunteerInput>,
) -> AppResult<Response> {
    let mut volunteer = load(&state, id).await?;

    if body.email != volunteer.email
        && queries::volunteers::email_exists(&state.pool, &body.email).await?
    {
        return Err(duplicate_email());
    }
    if body.phone != volunteer.phone
        && queries::volunteers::phone_exists(&state.pool, &body.phone).await?
    {
        return Err(duplicate_phone());
    }
    body.validate()?;

    if !volunteer.apply(body) {
        return Ok(Json(MessageResponse::new("No changes detected")).into_response());
    }
    queries::volunteers::update(&state.pool, &volunteer).await?;
    info!(volunteer_id = id, by = admin.id, "volunteer updated");
    Ok(Json(SuccessResponse::new("Volunteer updated successfully")).into_response())
}

async fn load(state: &AppState, id: i64) -> AppResult<Volunteer> {
    queries::volunteers::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Volunteer not found".into()))
}

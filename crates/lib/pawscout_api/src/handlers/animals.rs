//! Animal listing handlers. Reads are public, writes need an admin.

use axum::Json;
use axum::extract::{Path, State};
use pawscout_core::models::animal::{Animal, AnimalInput};
use pawscout_core::queries;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::models::SuccessResponse;

#[derive(Debug, Serialize)]
pub struct AnimalList {
    pub animals: Vec<Animal>,
}

fn not_found() -> AppError {
    AppError::NotFound("Animal not found".into())
}

/// `GET /animals`
pub async fn list_animals_handler(State(state): State<AppState>) -> AppResult<Json<AnimalList>> {
    let animals = queries::animals::list(&state.pool).await?;
    Ok(Json(AnimalList { animals }))
}

/// `GET /animals/{id}`
pub async fn get_animal_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Animal>> {
    let animal = queries::animals::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(animal))
}

/// `POST /animals`
pub async fn create_animal_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(body): Json<AnimalInput>,
) -> AppResult<Json<SuccessResponse>> {
    body.validate_new()?;
    let animal = queries::animals::create(&state.pool, &body).await?;
    info!(animal_id = animal.id, by = admin.id, "animal created");
    Ok(Json(SuccessResponse::new("Animal created successfully")))
}

/// `PUT /animals/{id}`
pub async fn update_animal_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<AnimalInput>,
) -> AppResult<Json<SuccessResponse>> {
    if !queries::animals::exists(&state.pool, id).await? {
        return Err(not_found());
    }
    body.validate_update()?;
    queries::animals::update(&state.pool, id, &body)
        .await?
        .ok_or_else(not_found)?;
    info!(animal_id = id, by = admin.id, "animal updated");
    Ok(Json(SuccessResponse::new("Animal updated successfully")))
}

/// `DELETE /animals/{id}`
pub async fn delete_animal_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    if !queries::animals::delete(&state.pool, id).await? {
        return Err(not_found());
    }
    info!(animal_id = id, by = admin.id, "animal deleted");
    Ok(Json(SuccessResponse::new("Animal deleted successfully")))
}

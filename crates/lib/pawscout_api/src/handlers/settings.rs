//! Shelter settings handlers.

use axum::Json;
use axum::extract::{Multipart, State};
use pawscout_core::media::{ResourceType, SETTINGS_FOLDER};
use pawscout_core::models::settings::{ShelterSettings, ShelterSettingsUpdate};
use pawscout_core::queries;
use tracing::{info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::services::media;

async fn current(state: &AppState) -> AppResult<ShelterSettings> {
    Ok(queries::settings::get(&state.pool).await?.unwrap_or_default())
}

/// `GET /settings`: stored settings, or defaults before the first save.
pub async fn get_settings_handler(State(state): State<AppState>) -> AppResult<Json<ShelterSettings>> {
    Ok(Json(current(&state).await?))
}

/// `PUT /settings`: partial update.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(body): Json<ShelterSettingsUpdate>,
) -> AppResult<Json<ShelterSettings>> {
    body.validate()?;
    let mut settings = current(&state).await?;
    body.apply(&mut settings);
    let saved = queries::settings::save(&state.pool, &settings).await?;
    info!(by = admin.id, "shelter settings updated");
    Ok(Json(saved))
}

/// `POST /settings/logo`: replace the logo. The previous image is removed from the host.
pub async fn upload_logo_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    mut multipart: Multipart,
) -> AppResult<Json<ShelterSettings>> {
    let host = media::host(&state)?;
    let mut uploads = media::read_uploads(&mut multipart, "file", 1).await?;
    let Some(upload) = uploads.pop() else {
        return Err(AppError::Validation("Missing file field 'file'".into()));
    };
    if upload.resource_type != ResourceType::Image {
        return Err(AppError::Validation("Logo must be an image".into()));
    }

    let uploaded = media::upload_all(host.as_ref(), vec![upload], SETTINGS_FOLDER)
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("media host returned no result".into()))?;

    let mut settings = current(&state).await?;
    let previous = settings.logo_public_id.replace(uploaded.public_id);
    settings.logo_url = Some(uploaded.url);
    settings.updated_at = chrono::Utc::now();
    let saved = queries::settings::save(&state.pool, &settings).await?;
    info!(by = admin.id, "shelter logo replaced");

    if let Some(old) = previous
        && let Err(e) = host.destroy(&old, ResourceType::Image).await
    {
        warn!(public_id = %old, error = %e, "failed to delete previous logo");
    }
    Ok(Json(saved))
}

//! Shelter settings queries. The table holds a single row with `id = 1`.

use sqlx::PgPool;

use crate::models::settings::ShelterSettings;

const SETTINGS_COLUMNS: &str = "id, logo_url, logo_public_id, shelter_name, shelter_email, \
     shelter_phone, shelter_address, city, state, zip_code, updated_at";

/// Fetch the settings row, if one has been saved.
pub async fn get(pool: &PgPool) -> Result<Option<ShelterSettings>, sqlx::Error> {
    sqlx::query_as::<_, ShelterSettings>(&format!(
        "SELECT {SETTINGS_COLUMNS} FROM shelter_settings WHERE id = 1"
    ))
    .fetch_optional(pool)
    .await
}

/// Insert or overwrite the settings row.
pub async fn save(pool: &PgPool, settings: &ShelterSettings) -> Result<ShelterSettings, sqlx::Error> {
    sqlx::query_as::<_, ShelterSettings>(&format!(
        "INSERT INTO shelter_settings (id, logo_url, logo_public_id, shelter_name, shelter_email, \
         shelter_phone, shelter_address, city, state, zip_code, updated_at) \
         VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         ON CONFLICT (id) DO UPDATE SET logo_url = EXCLUDED.logo_url, \
         logo_public_id = EXCLUDED.logo_public_id, shelter_name = EXCLUDED.shelter_name, \
         shelter_email = EXCLUDED.shelter_email, shelter_phone = EXCLUDED.shelter_phone, \
         shelter_address = EXCLUDED.shelter_address, city = EXCLUDED.city, \
         state = EXCLUDED.state, zip_code = EXCLUDED.zip_code, updated_at = EXCLUDED.updated_at \
         RETURNING {SETTINGS_COLUMNS}"
    ))
    .bind(&settings.logo_url)
    .bind(&settings.logo_public_id)
    .bind(&settings.shelter_name)
    .bind(&settings.shelter_email)
    .bind(&settings.shelter_phone)
    .bind(&settings.shelter_address)
    .bind(&settings.city)
    .bind(&settings.state)
    .bind(&settings.zip_code)
    .bind(settings.updated_at)
    .fetch_one(pool)
    .await
}

//! Shelter configuration shown on the public site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Name used until an administrator sets one.
pub const DEFAULT_SHELTER_NAME: &str = "PawScout Shelter";

/// The single settings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ShelterSettings {
    pub id: i64,
    /// Delivery URL of the shelter logo on the media host.
    pub logo_url: Option<String>,
    /// Media host identifier of the logo, used to delete it on replacement.
    pub logo_public_id: Option<String>,
    pub shelter_name: Option<String>,
    pub shelter_email: Option<String>,
    pub shelter_phone: Option<String>,
    pub shelter_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Default for ShelterSettings {
    fn default() -> Self {
        Self {
            id: 1,
            logo_url: None,
            logo_public_id: None,
            shelter_name: Some(DEFAULT_SHELTER_NAME.to_string()),
            shelter_email: None,
            shelter_phone: None,
            shelter_address: None,
            city: None,
            state: None,
            zip_code: None,
            updated_at: Utc::now(),
        }
    }
}

/// Partial update body. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShelterSettingsUpdate {
    pub shelter_name: Option<String>,
    pub shelter_email: Option<String>,
    pub shelter_phone: Option<String>,
    pub shelter_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl ShelterSettingsUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let limits = [
            ("shelter_name", &self.shelter_name, 200),
            ("shelter_email", &self.shelter_email, 200),
            ("shelter_phone", &self.shelter_phone, 50),
            ("shelter_address", &self.shelter_address, 500),
            ("city", &self.city, 100),
            ("state", &self.state, 100),
            ("zip_code", &self.zip_code, 20),
        ];
        for (field, value, max) in limits {
            if let Some(value) = value {
                validation::max_len(field, value, max)?;
            }
        }
        if let Some(email) = &self.shelter_email {
            validation::email_shape("shelter_email", email)?;
        }
        Ok(())
    }

    /// Merge into `settings`, bumping `updated_at`.
    pub fn apply(self, settings: &mut ShelterSettings) {
        fn merge(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }
        merge(&mut settings.shelter_name, self.shelter_name);
        merge(&mut settings.shelter_email, self.shelter_email);
        merge(&mut settings.shelter_phone, self.shelter_phone);
        merge(&mut settings.shelter_address, self.shelter_address);
        merge(&mut settings.city, self.city);
        merge(&mut settings.state, self.state);
        merge(&mut settings.zip_code, self.zip_code);
        settings.updated_at = Utc::now();
    }
}

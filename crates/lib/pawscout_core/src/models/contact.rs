//! Contact form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Contact form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageInput {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessageInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_blank("name", &self.name)?;
        validation::non_blank("lastName", &self.last_name)?;
        validation::non_blank("email", &self.email)?;
        validation::non_blank("subject", &self.subject)?;
        validation::non_blank("message", &self.message)?;
        Ok(())
    }
}

/// Stored contact message.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

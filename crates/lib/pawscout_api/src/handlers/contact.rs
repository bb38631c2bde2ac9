//! Contact form handler.

use axum::Json;
use axum::extract::State;
use pawscout_core::models::contact::{ContactMessage, ContactMessageInput};
use pawscout_core::queries;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub status: String,
    pub message: ContactMessage,
}

/// `POST /contact`
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(body): Json<ContactMessageInput>,
) -> AppResult<Json<ContactReceipt>> {
    body.validate()?;
    let message = queries::contact::create(&state.pool, &body).await?;
    info!(message_id = message.id, "contact message received");
    Ok(Json(ContactReceipt {
        status: "Message received".into(),
        message,
    }))
}

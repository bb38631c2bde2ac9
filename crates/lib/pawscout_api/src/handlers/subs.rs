//! Newsletter subscription handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use pawscout_core::models::subscription::{Subscription, SubscriptionInput};
use pawscout_core::queries;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::models::SuccessResponse;

/// `POST /subs`
pub async fn subscribe_handler(
    State(state): State<AppState>,
    Json(body): Json<SubscriptionInput>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    body.validate()?;
    queries::subscriptions::create(&state.pool, body.email.trim()).await?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("Subscription successful")),
    ))
}

/// `GET /subs`
pub async fn list_subscriptions_handler(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<Subscription>>> {
    let subscriptions = queries::subscriptions::list(&state.pool).await?;
    if subscriptions.is_empty() {
        return Err(AppError::NotFound("No subscriptions found".into()));
    }
    Ok(Json(subscriptions))
}

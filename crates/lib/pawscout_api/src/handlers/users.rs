//! Account request handlers.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use pawscout_core::models::auth::{NewUser, UserProfile};
use pawscout_core::queries;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthenticatedUser, CurrentUser};
use crate::models::{LoginRequest, SuccessResponse, TokenResponse};
use crate::services::auth;

/// `POST /users/register`: create a new account.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> AppResult<Json<SuccessResponse>> {
    auth::register(&state.pool, &body).await?;
    Ok(Json(SuccessResponse::new("User registered successfully")))
}

/// `POST /users/login`: authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let resp = auth::login(&state.tokens, &*state.users, &body).await?;
    Ok(Json(resp))
}

/// `GET /users/me`: the caller's own account.
pub async fn me_handler(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Json<UserProfile> {
    Json(UserProfile::from(&user))
}

/// `GET /users/{id}`: any account, for an authenticated caller.
pub async fn get_user_handler(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<UserProfile>> {
    let user = queries::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(UserProfile::from(&user)))
}

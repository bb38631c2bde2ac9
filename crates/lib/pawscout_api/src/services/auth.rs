//! Registration and login flows.

use pawscout_core::auth::{self as core_auth, TokenService, UserLookup, hash_password};
use pawscout_core::models::auth::{NewUser, UserProfile};
use pawscout_core::queries;
use pawscout_core::validation::ValidationError;
use sqlx::PgPool;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, TokenResponse};

/// Token type reported to clients.
pub const TOKEN_TYPE: &str = "bearer";

/// Register a new account. The first account ever created is an administrator.
pub async fn register(pool: &PgPool, body: &NewUser) -> AppResult<UserProfile> {
    body.validate()?;

    if queries::users::email_exists(pool, &body.email).await? {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(&body.password)?;

    let user =
        queries::users::create(pool, &body.email, &body.name, &body.last_name, &password_hash)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict("Email already registered".into()),
                other => other,
            })?;

    if user.is_admin {
        info!(user_id = user.id, "first user granted admin role");
    }
    info!(user_id = user.id, "user registered");
    Ok(UserProfile::from(&user))
}

/// Exchange email + password for an access token.
pub async fn login<L>(tokens: &TokenService, users: &L, body: &LoginRequest) -> AppResult<TokenResponse>
where
    L: UserLookup + ?Sized,
{
    if body.email.trim().is_empty() || body.password.trim().is_empty() {
        return Err(ValidationError("Email and password cannot be empty".into()).into());
    }

    let outcome = core_auth::authenticate(tokens, users, &body.email, &body.password).await?;
    Ok(TokenResponse {
        access_token: outcome.access_token,
        token_type: TOKEN_TYPE.to_string(),
        user: UserProfile::from(&outcome.user),
    })
}

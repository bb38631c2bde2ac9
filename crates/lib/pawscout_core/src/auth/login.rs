//! Credential check and token issuance at login.

use std::sync::LazyLock;

use tracing::info;

use super::AuthError;
use super::identity::UserLookup;
use super::jwt::TokenService;
use super::password::{hash_password, verify_password};
use crate::models::auth::{IdentityClaims, User};

/// Hash checked when the email is unknown, so both failure paths pay for
/// one Argon2 verification.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("pawscout-unknown-account").unwrap_or_default());

/// A successful login.
#[derive(Debug)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: User,
}

/// Check `email` + `password` and issue a token with the configured lifetime.
///
/// Unknown email and wrong password both yield `InvalidCredentials`.
pub async fn authenticate<L>(
    tokens: &TokenService,
    users: &L,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AuthError>
where
    L: UserLookup + ?Sized,
{
    let Some(user) = users
        .find_user_by_email(email)
        .await
        .map_err(|e| AuthError::Lookup(e.to_string()))?
    else {
        verify_password(password, &DUMMY_HASH);
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let access_token = tokens
        .issue(&IdentityClaims::from(&user), Some(tokens.access_token_ttl()))
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    info!(user_id = user.id, "user logged in");
    Ok(LoginOutcome { access_token, user })
}

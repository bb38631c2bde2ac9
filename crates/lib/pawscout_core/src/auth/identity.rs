//! Identity resolution: verified token to live user record.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::AuthError;
use super::jwt::TokenService;
use crate::models::auth::User;
use crate::queries;

/// Read access to user accounts, as needed by the auth core.
#[async_trait]
pub trait UserLookup: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, Self::Error>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Self::Error>;
}

#[async_trait]
impl UserLookup for PgPool {
    type Error = sqlx::Error;

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        queries::users::find_by_id(self, id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        queries::users::find_by_email(self, email).await
    }
}

/// Resolve a bearer token to the user it names.
///
/// A bad token and a deleted account are indistinguishable
/// (`Unauthenticated`). The returned user is freshly loaded, so its
/// `is_admin` reflects storage rather than the token snapshot.
pub async fn resolve<L>(tokens: &TokenService, users: &L, token: &str) -> Result<User, AuthError>
where
    L: UserLookup + ?Sized,
{
    let claims = tokens.verify(token).map_err(|e| {
        debug!(kind = e.kind(), "token rejected");
        AuthError::Unauthenticated
    })?;

    match users.find_user_by_id(claims.user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            debug!(user_id = claims.user_id, "token names an unknown user");
            Err(AuthError::Unauthenticated)
        }
        Err(e) => Err(AuthError::Lookup(e.to_string())),
    }
}

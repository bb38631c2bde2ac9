//! Authentication domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Persisted user account.
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("last_name", &self.last_name)
            .field("password_hash", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// Client-facing projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_blank("email", &self.email)?;
        validation::non_blank("name", &self.name)?;
        validation::non_blank("lastName", &self.last_name)?;
        validation::non_blank("password", &self.password)?;
        Ok(())
    }
}

/// Identity asserted by a freshly issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    /// The user's email.
    pub subject: String,
    pub user_id: i64,
    pub is_admin: bool,
    pub name: String,
    pub last_name: String,
}

impl From<&User> for IdentityClaims {
    fn from(user: &User) -> Self {
        Self {
            subject: user.email.clone(),
            user_id: user.id,
            is_admin: user.is_admin,
            name: user.name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// JWT claims embedded in access tokens.
///
/// `is_admin`, `name` and `last_name` are a snapshot taken at issuance and are
/// never used for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: user email (standard JWT `sub` claim).
    pub sub: String,
    pub user_id: i64,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 3,
            email: "ana@pawscout.com".into(),
            name: "Ana".into(),
            last_name: "Silva".into(),
            password_hash: "$argon2id$secret".into(),
            is_admin: true,
        }
    }

    #[test]
    fn profile_omits_password_hash() {
        let json = serde_json::to_value(UserProfile::from(&user())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "email": "ana@pawscout.com",
                "name": "Ana",
                "lastName": "Silva",
                "isAdmin": true
            })
        );
    }

    #[test]
    fn debug_redacts_password_hash() {
        let rendered = format!("{:?}", user());
        assert!(!rendered.contains("$argon2id"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn new_user_rejects_blank_last_name() {
        let body: NewUser = serde_json::from_value(serde_json::json!({
            "email": "ana@pawscout.com",
            "name": "Ana",
            "lastName": " ",
            "password": "hunter22"
        }))
        .unwrap();
        assert_eq!(body.validate().unwrap_err().0, "lastName cannot be empty");
    }
}

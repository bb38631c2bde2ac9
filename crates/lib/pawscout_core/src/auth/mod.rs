//! Authentication and authorization logic.
//!
//! Password hashing, JWT issuance/verification, identity resolution and the
//! admin gate. Storage is reached only through the [`UserLookup`] trait.

pub mod access;
pub mod config;
pub mod identity;
pub mod jwt;
pub mod login;
pub mod password;

use thiserror::Error;

pub use access::require_admin;
pub use config::{AuthConfig, ConfigError};
pub use identity::{UserLookup, resolve};
pub use jwt::{TokenError, TokenService};
pub use login::{LoginOutcome, authenticate};
pub use password::{hash_password, verify_password};

/// Authentication errors.
///
/// Every token problem and every unknown account collapses into
/// `Unauthenticated`; the precise cause is only logged.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Admin privileges required")]
    Forbidden,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User lookup failed: {0}")]
    Lookup(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

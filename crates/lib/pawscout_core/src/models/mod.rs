//! Domain models.
//!
//! Request bodies use the camelCase field names of the public API; database
//! rows map to snake_case columns through `sqlx::FromRow`.

pub mod adoption;
pub mod animal;
pub mod auth;
pub mod contact;
pub mod settings;
pub mod subscription;
pub mod volunteer;

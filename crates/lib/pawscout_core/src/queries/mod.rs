//! PostgreSQL queries, one module per table.
//!
//! Free functions over `&PgPool`; callers map `sqlx::Error` at their boundary.

pub mod adoptions;
pub mod animals;
pub mod contact;
pub mod settings;
pub mod subscriptions;
pub mod users;
pub mod volunteers;

//! Service layer between handlers and `pawscout_core`.

pub mod auth;
pub mod media;

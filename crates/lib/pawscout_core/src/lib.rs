//! # pawscout_core
//!
//! Core domain logic for PawScout.

pub mod auth;
pub mod media;
pub mod migrate;
pub mod models;
pub mod queries;
pub mod validation;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}

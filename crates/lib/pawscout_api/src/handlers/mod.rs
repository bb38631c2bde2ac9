//! Request handlers.

pub mod admin;
pub mod adopt;
pub mod animals;
pub mod contact;
pub mod media;
pub mod settings;
pub mod subs;
pub mod users;
pub mod volunteers;

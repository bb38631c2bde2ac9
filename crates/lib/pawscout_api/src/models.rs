//! Request and response bodies owned by the HTTP layer.
//!
//! Domain entities are serialized straight from `pawscout_core::models`.

use pawscout_core::media::ResourceType;
use pawscout_core::models::auth::UserProfile;
use serde::{Deserialize, Serialize};

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `{"success": "..."}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: message.into(),
        }
    }
}

/// `{"message": "..."}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// Result of a role change, with the affected user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChangeResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaDeleteRequest {
    pub public_id: String,
    #[serde(default)]
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDeleteResponse {
    pub message: String,
    pub public_id: String,
}

//! Media storage on an external image/video host.
//!
//! [`MediaHost`] is the seam used by handlers; [`cloudinary::CloudinaryClient`]
//! is the production implementation.

pub mod cloudinary;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content types accepted for upload.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/quicktime",
    "video/x-msvideo",
];

/// Files accepted in one multi-file upload.
pub const MAX_FILES_PER_UPLOAD: usize = 10;

/// Folder for animal photos and videos.
pub const ANIMALS_FOLDER: &str = "pawscout/animals";

/// Folder for the shelter logo.
pub const SETTINGS_FOLDER: &str = "pawscout/settings";

/// Media host errors.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media host is not configured")]
    NotConfigured,

    #[error("Invalid file type: {0}")]
    UnsupportedType(String),

    #[error("Media not found or already deleted")]
    NotFound,

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Delete failed: {0}")]
    Delete(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Host-side storage class of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Image,
    Video,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
        }
    }

    /// Classify an upload, rejecting types outside [`ALLOWED_CONTENT_TYPES`].
    pub fn for_content_type(content_type: &str) -> Result<Self, MediaError> {
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(MediaError::UnsupportedType(content_type.to_string()));
        }
        if content_type.starts_with("video/") {
            Ok(ResourceType::Video)
        } else {
            Ok(ResourceType::Image)
        }
    }
}

/// A file received from a client, ready to forward.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    pub url: String,
    pub public_id: String,
    pub resource_type: String,
    pub format: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub bytes: Option<i64>,
}

/// External media storage.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(
        &self,
        file: MediaFile,
        folder: &str,
        resource_type: ResourceType,
    ) -> Result<UploadedMedia, MediaError>;

    /// Remove an asset. `NotFound` if the host did not delete anything.
    async fn destroy(&self, public_id: &str, resource_type: ResourceType) -> Result<(), MediaError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_allowed_types() {
        assert_eq!(ResourceType::for_content_type("image/png").unwrap(), ResourceType::Image);
        assert_eq!(ResourceType::for_content_type("video/quicktime").unwrap(), ResourceType::Video);
    }

    #[test]
    fn rejects_other_types() {
        assert!(matches!(
            ResourceType::for_content_type("application/pdf"),
            Err(MediaError::UnsupportedType(_))
        ));
        assert!(matches!(
            ResourceType::for_content_type("video/webm"),
            Err(MediaError::UnsupportedType(_))
        ));
    }

    #[test]
    fn resource_type_defaults_to_image() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default)]
            resource_type: ResourceType,
        }
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.resource_type, ResourceType::Image);
        let body: Body = serde_json::from_str(r#"{"resource_type":"video"}"#).unwrap();
        assert_eq!(body.resource_type, ResourceType::Video);
    }
}

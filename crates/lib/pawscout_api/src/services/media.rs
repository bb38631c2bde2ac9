//! Multipart intake and forwarding to the media host.

use std::sync::Arc;

use axum::extract::Multipart;
use pawscout_core::media::{MediaError, MediaFile, MediaHost, ResourceType, UploadedMedia};
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// A received file, classified for the host.
#[derive(Debug)]
pub struct Upload {
    pub file: MediaFile,
    pub resource_type: ResourceType,
}

/// The configured media host, or 503.
pub fn host(state: &AppState) -> AppResult<Arc<dyn MediaHost>> {
    state
        .media
        .clone()
        .ok_or_else(|| MediaError::NotConfigured.into())
}

/// Read every part named `field`, rejecting disallowed types and more than `max_files` parts.
pub async fn read_uploads(
    multipart: &mut Multipart,
    field: &str,
    max_files: usize,
) -> AppResult<Vec<Upload>> {
    let mut uploads = Vec::new();
    while let Some(part) = multipart.next_field().await? {
        if part.name() != Some(field) {
            continue;
        }
        if uploads.len() == max_files {
            return Err(AppError::Validation(format!(
                "Maximum {max_files} files per upload"
            )));
        }
        let file_name = part.file_name().unwrap_or("upload").to_string();
        let content_type = part.content_type().unwrap_or_default().to_string();
        let resource_type = ResourceType::for_content_type(&content_type).map_err(|e| {
            if max_files > 1 {
                AppError::Validation(format!(
                    "Invalid file type in '{file_name}'. Allowed: images and videos"
                ))
            } else {
                e.into()
            }
        })?;
        let bytes = part.bytes().await?.to_vec();
        uploads.push(Upload {
            file: MediaFile {
                file_name,
                content_type,
                bytes,
            },
            resource_type,
        });
    }
    if uploads.is_empty() {
        return Err(AppError::Validation(format!("Missing file field '{field}'")));
    }
    Ok(uploads)
}

/// Upload files in order under `folder`.
pub async fn upload_all(
    host: &dyn MediaHost,
    uploads: Vec<Upload>,
    folder: &str,
) -> AppResult<Vec<UploadedMedia>> {
    let mut results = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let uploaded = host.upload(upload.file, folder, upload.resource_type).await?;
        info!(public_id = %uploaded.public_id, folder, "media uploaded");
        results.push(uploaded);
    }
    Ok(results)
}

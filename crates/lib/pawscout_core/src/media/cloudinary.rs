//! Cloudinary upload API client.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use tracing::{debug, warn};

use super::{MediaError, MediaFile, MediaHost, ResourceType, UploadedMedia};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
const DELIVERY_BASE: &str = "https://res.cloudinary.com";

/// Transformation applied to image uploads.
const IMAGE_TRANSFORMATION: &str = "q_auto,f_auto";

/// Account credentials.
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Sign request parameters: sorted `k=v` pairs joined by `&`, secret appended, SHA-1 hex.
///
/// Empty values are left out of the signature.
pub fn sign(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    resource_type: String,
    #[serde(default)]
    format: String,
    width: Option<i64>,
    height: Option<i64>,
    bytes: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, resource_type: ResourceType, action: &str) -> String {
        format!(
            "{API_BASE}/{}/{}/{action}",
            self.config.cloud_name,
            resource_type.as_str()
        )
    }

    /// Delivery URL for a resized, auto-format, auto-quality image.
    ///
    /// Uploads return the original `secure_url`; this builds the thumbnail
    /// variants clients request by `public_id`.
    pub fn optimized_url(&self, public_id: &str, width: u32, height: u32) -> String {
        format!(
            "{DELIVERY_BASE}/{}/image/upload/c_fill,f_auto,h_{height},q_auto,w_{width}/{public_id}",
            self.config.cloud_name
        )
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("media host returned {status}"),
        }
    }
}

#[async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(
        &self,
        file: MediaFile,
        folder: &str,
        resource_type: ResourceType,
    ) -> Result<UploadedMedia, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let mut params = BTreeMap::new();
        params.insert("folder", folder.to_string());
        params.insert("timestamp", timestamp);
        if resource_type == ResourceType::Image {
            params.insert("transformation", IMAGE_TRANSFORMATION.to_string());
        }
        let signature = sign(&params, &self.config.api_secret);

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        debug!(folder, resource_type = resource_type.as_str(), "uploading media");
        let response = self
            .http
            .post(self.endpoint(resource_type, "upload"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            warn!(%message, "media upload rejected");
            return Err(MediaError::Upload(message));
        }

        let body: UploadResponse = response.json().await?;
        Ok(UploadedMedia {
            url: body.secure_url,
            public_id: body.public_id,
            resource_type: body.resource_type,
            format: body.format,
            width: body.width,
            height: body.height,
            bytes: body.bytes,
        })
    }

    async fn destroy(&self, public_id: &str, resource_type: ResourceType) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());
        params.insert("timestamp", timestamp.clone());
        let signature = sign(&params, &self.config.api_secret);

        let response = self
            .http
            .post(self.endpoint(resource_type, "destroy"))
            .form(&[
                ("public_id", public_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.config.api_key.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            warn!(%message, public_id, "media delete rejected");
            return Err(MediaError::Delete(message));
        }

        let body: DestroyResponse = response.json().await?;
        if body.result == "ok" {
            debug!(public_id, "media deleted");
            Ok(())
        } else {
            Err(MediaError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CloudinaryClient {
        CloudinaryClient::new(CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "1234".into(),
            api_secret: "abcd".into(),
        })
    }

    #[test]
    fn signs_sorted_parameters() {
        let mut params = BTreeMap::new();
        params.insert("timestamp", "1315060510".to_string());
        params.insert("public_id", "sample_image".to_string());
        params.insert("eager", "w_400,h_300,c_pad|w_260,h_200,c_crop".to_string());
        assert_eq!(
            sign(&params, "abcd"),
            "bfd09f95f331f558cbd1320e67aa8d488770583e"
        );
    }

    #[test]
    fn empty_parameters_are_not_signed() {
        let mut with_empty = BTreeMap::new();
        with_empty.insert("timestamp", "1315060510".to_string());
        with_empty.insert("folder", String::new());
        let mut without = BTreeMap::new();
        without.insert("timestamp", "1315060510".to_string());
        assert_eq!(sign(&with_empty, "abcd"), sign(&without, "abcd"));
    }

    #[test]
    fn optimized_url_resizes_with_auto_format() {
        assert_eq!(
            client().optimized_url("pawscout/animals/rex", 800, 600),
            "https://res.cloudinary.com/demo/image/upload/c_fill,f_auto,h_600,q_auto,w_800/pawscout/animals/rex"
        );
    }

    #[test]
    fn endpoints_follow_resource_type() {
        let client = client();
        assert_eq!(
            client.endpoint(ResourceType::Video, "upload"),
            "https://api.cloudinary.com/v1_1/demo/video/upload"
        );
        assert_eq!(
            client.endpoint(ResourceType::Image, "destroy"),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }

    #[test]
    fn debug_hides_secret() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("abcd"));
    }
}

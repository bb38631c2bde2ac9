//! API server configuration.

use pawscout_core::auth::AuthConfig;
use pawscout_core::media::cloudinary::CloudinaryConfig;

/// Default listener address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// Token signing settings.
    pub auth: AuthConfig,
    /// Media host credentials. Media routes answer 503 without them.
    pub cloudinary: Option<CloudinaryConfig>,
}

impl ApiConfig {
    /// Media host credentials, present only when all three parts are set and non-blank.
    pub fn cloudinary_from_parts(
        cloud_name: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Option<CloudinaryConfig> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(CloudinaryConfig {
            cloud_name: present(cloud_name)?,
            api_key: present(api_key)?,
            api_secret: present(api_secret)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudinary_needs_every_part() {
        assert!(
            ApiConfig::cloudinary_from_parts(Some("demo".into()), Some("1".into()), None).is_none()
        );
        assert!(
            ApiConfig::cloudinary_from_parts(Some("demo".into()), Some(" ".into()), Some("s".into()))
                .is_none()
        );
        let config =
            ApiConfig::cloudinary_from_parts(Some("demo".into()), Some("1".into()), Some("s".into()))
                .unwrap();
        assert_eq!(config.cloud_name, "demo");
    }
}

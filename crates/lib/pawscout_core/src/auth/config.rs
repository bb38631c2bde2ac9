//! Token signing configuration, built once at startup.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Invalid or missing authentication settings. Fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("secret key must not be empty")]
    EmptySecret,

    #[error("unknown signature algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unsupported signature algorithm {0}: only HS256, HS384 and HS512 are accepted")]
    UnsupportedAlgorithm(String),

    #[error("token lifetime must be a positive number of minutes, got {0}")]
    InvalidLifetime(i64),
}

/// Secret key, algorithm and default access-token lifetime.
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    algorithm: Algorithm,
    access_token_ttl: Duration,
}

impl AuthConfig {
    /// Validate the raw settings.
    ///
    /// `algorithm` is a JWS identifier such as `"HS256"`; only the HMAC family
    /// is accepted.
    pub fn new(secret: &str, algorithm: &str, ttl_minutes: i64) -> Result<Self, ConfigError> {
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        let parsed = Algorithm::from_str(algorithm.trim())
            .map_err(|_| ConfigError::UnknownAlgorithm(algorithm.to_string()))?;
        if !matches!(parsed, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(ConfigError::UnsupportedAlgorithm(algorithm.to_string()));
        }
        if ttl_minutes <= 0 {
            return Err(ConfigError::InvalidLifetime(ttl_minutes));
        }
        Ok(Self {
            secret: secret.to_string(),
            algorithm: parsed,
            access_token_ttl: Duration::minutes(ttl_minutes),
        })
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Lifetime given to tokens issued at login.
    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hmac_algorithms() {
        for alg in ["HS256", "HS384", "HS512"] {
            let config = AuthConfig::new("s3cret", alg, 30).unwrap();
            assert_eq!(config.access_token_ttl(), Duration::minutes(30));
        }
    }

    #[test]
    fn rejects_empty_secret() {
        assert_eq!(
            AuthConfig::new("  ", "HS256", 30).unwrap_err(),
            ConfigError::EmptySecret
        );
    }

    #[test]
    fn rejects_unknown_and_asymmetric_algorithms() {
        assert!(matches!(
            AuthConfig::new("s3cret", "HS999", 30),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            AuthConfig::new("s3cret", "RS256", 30),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn rejects_non_positive_lifetime() {
        assert_eq!(
            AuthConfig::new("s3cret", "HS256", 0).unwrap_err(),
            ConfigError::InvalidLifetime(0)
        );
    }

    #[test]
    fn debug_hides_secret() {
        let config = AuthConfig::new("very-secret-value", "HS256", 30).unwrap();
        assert!(!format!("{config:?}").contains("very-secret-value"));
    }
}

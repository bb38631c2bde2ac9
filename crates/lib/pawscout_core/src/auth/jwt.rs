//! JWT token generation and verification.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, crypto, decode, encode};
use serde::Deserialize;
use thiserror::Error;

use super::config::AuthConfig;
use crate::models::auth::{IdentityClaims, TokenClaims};

/// Lifetime applied when `issue` is called without one: 15 minutes.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 15;

/// Why a token was rejected. Never shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not verify")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is missing required claims")]
    MissingClaims,

    #[error("token encoding failed: {0}")]
    Encode(String),
}

impl TokenError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::BadSignature => "bad_signature",
            TokenError::Expired => "expired",
            TokenError::MissingClaims => "missing_claims",
            TokenError::Encode(_) => "encode",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::MissingRequiredClaim(_) => TokenError::MissingClaims,
            _ => TokenError::Malformed,
        }
    }
}

/// Claims as read off the wire; absence is reported as `MissingClaims`.
#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default, rename = "isAdmin")]
    is_admin: bool,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "lastName")]
    last_name: String,
    #[serde(default)]
    exp: Option<i64>,
    #[serde(default)]
    iat: i64,
}

/// Issues and verifies signed access tokens.
///
/// Keys are derived once from [`AuthConfig`]; the service is immutable and
/// shared read-only across requests.
#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_token_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm());
        // Expiry is checked in `verify` with no leeway; presence of `sub`,
        // `user_id` and `exp` is checked there too.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::new();
        Self {
            algorithm: config.algorithm(),
            encoding: EncodingKey::from_secret(config.secret()),
            decoding: DecodingKey::from_secret(config.secret()),
            validation,
            access_token_ttl: config.access_token_ttl(),
        }
    }

    /// Configured lifetime for login tokens.
    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Sign a token for `identity` expiring `ttl` from now
    /// (default [`DEFAULT_TOKEN_LIFETIME_MINUTES`]).
    pub fn issue(&self, identity: &IdentityClaims, ttl: Option<Duration>) -> Result<String, TokenError> {
        let now = Utc::now();
        let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_LIFETIME_MINUTES));
        let claims = TokenClaims {
            sub: identity.subject.clone(),
            user_id: identity.user_id,
            is_admin: identity.is_admin,
            name: identity.name.clone(),
            last_name: identity.last_name.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|e| TokenError::Encode(format!("jwt encode: {e}")))
    }

    /// Check structure, signature and expiry, returning the claims.
    ///
    /// The signature is checked over the raw `header.payload` bytes before
    /// either segment is parsed, so any edit to a signed token is
    /// `BadSignature`. Pure; never touches storage.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let Some((message, signature)) = token.rsplit_once('.') else {
            return Err(TokenError::Malformed);
        };
        if message.split('.').count() != 2 {
            return Err(TokenError::Malformed);
        }
        match crypto::verify(signature, message.as_bytes(), &self.decoding, self.algorithm) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(TokenError::BadSignature),
        }

        let data = decode::<RawClaims>(token, &self.decoding, &self.validation)?;
        let raw = data.claims;

        let (Some(sub), Some(user_id), Some(exp)) = (raw.sub, raw.user_id, raw.exp) else {
            return Err(TokenError::MissingClaims);
        };
        if sub.trim().is_empty() {
            return Err(TokenError::MissingClaims);
        }
        if Utc::now().timestamp() >= exp {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            sub,
            user_id,
            is_admin: raw.is_admin,
            name: raw.name,
            last_name: raw.last_name,
            exp,
            iat: raw.iat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-unit-tests";

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::new(SECRET, "HS256", 30).unwrap())
    }

    fn identity() -> IdentityClaims {
        IdentityClaims {
            subject: "a@b.com".into(),
            user_id: 7,
            is_admin: false,
            name: "Ana".into(),
            last_name: "Silva".into(),
        }
    }

    /// Replace one character of segment `segment` with a different base64url
    /// character.
    fn tamper(token: &str, segment: usize) -> String {
        let mid = token.split('.').nth(segment).map_or(0, |s| s.len() / 2);
        tamper_at(token, segment, mid)
    }

    fn tamper_at(token: &str, segment: usize, index: usize) -> String {
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let target = &mut parts[segment];
        let original = target.as_bytes()[index];
        let replacement = if original == b'A' { 'B' } else { 'A' };
        target.replace_range(index..index + 1, &replacement.to_string());
        parts.join(".")
    }

    #[test]
    fn issue_then_verify_returns_claims() {
        let tokens = service();
        let token = tokens.issue(&identity(), Some(Duration::minutes(30))).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.user_id, 7);
        assert!(!claims.is_admin);
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.last_name, "Silva");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn default_lifetime_is_fifteen_minutes() {
        let tokens = service();
        let token = tokens.issue(&identity(), None).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_LIFETIME_MINUTES * 60);
    }

    #[test]
    fn zero_ttl_is_expired() {
        let tokens = service();
        let token = tokens.issue(&identity(), Some(Duration::zero())).unwrap();
        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn past_expiry_is_expired() {
        let tokens = service();
        let token = tokens.issue(&identity(), Some(Duration::minutes(-5))).unwrap();
        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn tampered_payload_fails_signature() {
        let tokens = service();
        let token = tokens.issue(&identity(), None).unwrap();
        assert_eq!(tokens.verify(&tamper(&token, 1)), Err(TokenError::BadSignature));
    }

    #[test]
    fn tampered_header_fails_signature() {
        let tokens = service();
        let token = tokens.issue(&identity(), None).unwrap();
        assert_eq!(tokens.verify(&tamper(&token, 0)), Err(TokenError::BadSignature));
    }

    #[test]
    fn every_header_byte_is_covered_by_the_signature() {
        let tokens = service();
        let token = tokens.issue(&identity(), None).unwrap();
        let header_len = token.split('.').next().unwrap().len();
        for index in 0..header_len {
            assert_eq!(
                tokens.verify(&tamper_at(&token, 0, index)),
                Err(TokenError::BadSignature),
                "header byte {index}"
            );
        }
    }

    #[test]
    fn signed_garbage_header_is_malformed() {
        let message = "not-json.e30";
        let signature = crypto::sign(
            message.as_bytes(),
            &EncodingKey::from_secret(SECRET.as_bytes()),
            Algorithm::HS256,
        )
        .unwrap();
        assert_eq!(
            service().verify(&format!("{message}.{signature}")),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn tampered_signature_fails_signature() {
        let tokens = service();
        let token = tokens.issue(&identity(), None).unwrap();
        assert_eq!(tokens.verify(&tamper(&token, 2)), Err(TokenError::BadSignature));
    }

    #[test]
    fn other_secret_fails_signature() {
        let other = TokenService::new(&AuthConfig::new("another-secret", "HS256", 30).unwrap());
        let token = other.issue(&identity(), None).unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn other_algorithm_fails_signature() {
        let other = TokenService::new(&AuthConfig::new(SECRET, "HS512", 30).unwrap());
        let token = other.issue(&identity(), None).unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn garbage_is_malformed() {
        let tokens = service();
        assert_eq!(tokens.verify(""), Err(TokenError::Malformed));
        assert_eq!(tokens.verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(tokens.verify("a.b"), Err(TokenError::Malformed));
        assert_eq!(tokens.verify("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn missing_user_id_is_missing_claims() {
        let claims = serde_json::json!({
            "sub": "a@b.com",
            "isAdmin": true,
            "exp": Utc::now().timestamp() + 600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::MissingClaims));
    }

    #[test]
    fn missing_subject_is_missing_claims() {
        let claims = serde_json::json!({
            "user_id": 7,
            "exp": Utc::now().timestamp() + 600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::MissingClaims));
    }

    #[test]
    fn missing_expiry_is_missing_claims() {
        let claims = serde_json::json!({ "sub": "a@b.com", "user_id": 7 });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::MissingClaims));
    }
}

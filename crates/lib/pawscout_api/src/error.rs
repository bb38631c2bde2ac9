//! Application error types.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use pawscout_core::auth::AuthError;
use pawscout_core::media::MediaError;
use pawscout_core::validation::ValidationError;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Body of every 403 from the admin gate.
pub const ADMIN_REQUIRED: &str =
    "You do not have permission to access this resource. Admin privileges required.";

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Media host unavailable: {0}")]
    MediaUnavailable(String),

    #[error("Media host error: {0}")]
    BadGateway(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Conflict(m) => (StatusCode::CONFLICT, "conflict", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, "forbidden", m.as_str()),
            AppError::PayloadTooLarge(m) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", m.as_str())
            }
            AppError::MediaUnavailable(m) => {
                (StatusCode::SERVICE_UNAVAILABLE, "media_unavailable", m.as_str())
            }
            AppError::BadGateway(m) => (StatusCode::BAD_GATEWAY, "media_host_error", m.as_str()),
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::Conflict("Record already exists".into());
        }
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthenticated | AuthError::InvalidCredentials => {
                AppError::Unauthorized(e.to_string())
            }
            AuthError::Forbidden => AppError::Forbidden(ADMIN_REQUIRED.into()),
            AuthError::Lookup(msg) => AppError::Internal(format!("user lookup: {msg}")),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.0)
    }
}

impl From<MediaError> for AppError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::NotConfigured => AppError::MediaUnavailable(e.to_string()),
            MediaError::UnsupportedType(_) => AppError::Validation(format!(
                "{e}. Allowed: images (jpg, png, gif, webp) and videos (mp4, mov, avi)"
            )),
            MediaError::NotFound => AppError::NotFound(e.to_string()),
            MediaError::Upload(_) | MediaError::Delete(_) | MediaError::Http(_) => {
                warn!(error = %e, "media host call failed");
                AppError::BadGateway(e.to_string())
            }
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::Validation(e.body_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unauthenticated_carries_bearer_challenge() {
        let response = AppError::from(AuthError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
        let json = body_json(response).await;
        assert_eq!(json["error"], "unauthorized");
        assert_eq!(json["message"], "Could not validate credentials");
    }

    #[tokio::test]
    async fn forbidden_has_no_challenge() {
        let response = AppError::from(AuthError::Forbidden).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(WWW_AUTHENTICATE).is_none());
        assert_eq!(body_json(response).await["message"], ADMIN_REQUIRED);
    }

    #[tokio::test]
    async fn lookup_failure_is_internal_and_hides_detail() {
        let response =
            AppError::from(AuthError::Lookup("connection refused".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn media_errors_map_to_gateway_statuses() {
        assert!(matches!(
            AppError::from(MediaError::NotConfigured),
            AppError::MediaUnavailable(_)
        ));
        assert!(matches!(
            AppError::from(MediaError::Upload("quota".into())),
            AppError::BadGateway(_)
        ));
        assert!(matches!(
            AppError::from(MediaError::NotFound),
            AppError::NotFound(m) if m == "Media not found or already deleted"
        ));
    }
}

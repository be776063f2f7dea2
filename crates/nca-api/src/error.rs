//! API error types.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use nca_media::MediaError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required server-side setting is missing.
    #[error("{0} not configured on server.")]
    MisconfiguredServer(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("Video processing failed: {0}")]
    ProcessingFailed(String),

    #[error("{0}")]
    Validation(String),

    /// The body could not be read (too large, aborted, ...).
    #[error("{detail}")]
    BodyRejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn misconfigured(setting: impl Into<String>) -> Self {
        Self::MisconfiguredServer(setting.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    pub fn processing_failed(msg: impl Into<String>) -> Self {
        Self::ProcessingFailed(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::MisconfiguredServer(_) | ApiError::ProcessingFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        Self::ProcessingFailed(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => Self::Validation(rejection.body_text()),
            _ => Self::BodyRejected {
                status: rejection.status(),
                detail: rejection.body_text(),
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::misconfigured("API_SECRET_KEY").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::service_unavailable("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::processing_failed("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_details() {
        assert_eq!(
            ApiError::misconfigured("API_SECRET_KEY").to_string(),
            "API_SECRET_KEY not configured on server."
        );
        assert_eq!(
            ApiError::unauthorized("Invalid API Key.").to_string(),
            "Unauthorized: Invalid API Key."
        );
    }

    #[test]
    fn test_media_error_maps_to_processing_failed() {
        let err: ApiError = MediaError::processing_failed("encoder crashed").into();
        assert!(matches!(err, ApiError::ProcessingFailed(_)));
        assert_eq!(err.to_string(), "Video processing failed: encoder crashed");
    }
}

use activity_core::DomainError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl ApiError {
    /// Like the `From` conversion, but with an endpoint-specific message for a
    /// missing or unknown token.
    pub fn unauthenticated_as(err: DomainError, message: &str) -> Self {
        match err {
            DomainError::Unauthenticated => ApiError::Unauthorized(message.to_string()),
            other => other.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => ApiError::Unauthorized("Invalid credentials".to_string()),
            DomainError::Unauthenticated => ApiError::Unauthorized("Not authenticated".to_string()),
            DomainError::SessionExpired => ApiError::Unauthorized("Session expired".to_string()),
            DomainError::ActivityNotFound(_) => ApiError::NotFound("Activity not found".to_string()),
            DomainError::AlreadyEnrolled => {
                ApiError::BadRequest("Student is already signed up".to_string())
            }
            DomainError::NotEnrolled => {
                ApiError::BadRequest("Student is not signed up for this activity".to_string())
            }
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::CredentialSource(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

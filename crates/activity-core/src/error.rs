//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadyEnrolled,

    #[error("Student is not signed up for this activity")]
    NotEnrolled,

    #[error("Credential source error: {0}")]
    CredentialSource(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

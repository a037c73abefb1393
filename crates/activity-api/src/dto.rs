//! Query parameters and response bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /login?username=&password=`
///
/// Absent or blank fields are not rejected here; they simply fail to match
/// a teacher and come back as invalid credentials.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// `?token=` on logout and `/me`
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// `?email=&token=` on signup and unregister
#[derive(Debug, Deserialize, Validate)]
pub struct EnrollmentQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

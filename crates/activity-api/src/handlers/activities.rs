// ============================================================================
// Activity API - Activity Handlers
// File: crates/activity-api/src/handlers/activities.rs
// ============================================================================
//! Activity listing and teacher-only enrollment changes

use activity_core::{ActivityListing, Session};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::dto::{EnrollmentQuery, MessageResponse};
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// List handler - GET /activities
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(state.activities.list())
}

/// Signup handler - POST /activities/{activity_name}/signup
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    ApiQuery(query): ApiQuery<EnrollmentQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session = authorize(
        &state,
        query.token.as_deref(),
        "Authentication required. Only teachers can signup students.",
    )?;
    query.validate()?;

    debug!("{} signing up {} for {}", session.username, query.email, activity_name);
    state.activities.enroll(&activity_name, &query.email)?;

    Ok(Json(MessageResponse::new(format!(
        "Signed up {} for {}",
        query.email, activity_name
    ))))
}

/// Unregister handler - DELETE /activities/{activity_name}/unregister
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    ApiQuery(query): ApiQuery<EnrollmentQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session = authorize(
        &state,
        query.token.as_deref(),
        "Authentication required. Only teachers can unregister students.",
    )?;
    query.validate()?;

    debug!("{} unregistering {} from {}", session.username, query.email, activity_name);
    state.activities.unenroll(&activity_name, &query.email)?;

    Ok(Json(MessageResponse::new(format!(
        "Unregistered {} from {}",
        query.email, activity_name
    ))))
}

/// Session check that must pass before the registry is touched.
fn authorize(state: &AppState, token: Option<&str>, denied: &str) -> Result<Session, ApiError> {
    state
        .sessions
        .validate(token.unwrap_or_default())
        .map_err(|e| ApiError::unauthenticated_as(e, denied))
}

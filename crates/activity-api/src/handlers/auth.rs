// ============================================================================
// Activity API - Auth Handlers
// File: crates/activity-api/src/handlers/auth.rs
// ============================================================================
//! Teacher login, logout, and session lookup

use activity_core::{CurrentUser, DomainError};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use crate::dto::{LoginQuery, LoginResponse, MessageResponse, TokenQuery};
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Login handler - POST /login
pub async fn login(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LoginQuery>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .sessions
        .authenticate(&query.username, &query.password)
        .await?;

    Ok(Json(LoginResponse {
        token: session.token,
        username: session.username,
        message: "Login successful".to_string(),
    }))
}

/// Logout handler - POST /logout
///
/// Always succeeds, even when the query string cannot be read.
pub async fn logout(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Json<MessageResponse> {
    match query {
        Ok(Query(TokenQuery { token: Some(token) })) => state.sessions.revoke(&token),
        Ok(_) => {}
        Err(rejection) => debug!("Logout with unreadable query: {}", rejection.body_text()),
    }
    Json(MessageResponse::new("Logout successful"))
}

/// Current user handler - GET /me
pub async fn me(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<CurrentUser>, ApiError> {
    let Ok(Query(TokenQuery { token: Some(token) })) = query else {
        return Err(DomainError::Unauthenticated.into());
    };
    let user = state.sessions.current_user(&token)?;
    Ok(Json(user))
}

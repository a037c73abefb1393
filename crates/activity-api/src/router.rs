use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{activities, auth, health};
use crate::state::AppState;

/// API routes with state applied. Static assets and tracing are layered on by the server.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        // Activity routes
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route("/activities/{activity_name}/unregister", delete(activities::unregister))
        .with_state(state)
}

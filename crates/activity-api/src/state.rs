use std::sync::Arc;

use activity_core::{ActivityRegistry, SessionStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub activities: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionStore>, activities: Arc<ActivityRegistry>) -> Self {
        Self {
            sessions,
            activities,
        }
    }
}

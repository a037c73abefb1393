//! # Activity Core - Domain Module
//! 
//! Domain entities for the activity signup backend.

pub mod activity;
pub mod seed;
pub mod session;
pub mod user;

// Re-export all entities and enums
pub use activity::{Activity, ActivityListing};
pub use seed::seed_activities;
pub use session::Session;
pub use user::{CurrentUser, Role};

//! # Activity API
//! 
//! HTTP handlers, DTOs, error mapping, and router for the activity signup backend.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use extract::ApiQuery;
pub use router::build_router;
pub use state::AppState;

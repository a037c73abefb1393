//! # Activity Core
//! 
//! Domain entities, services, and ports for the activity signup backend.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use repositories::{CredentialSource, Credentials};
pub use services::{ActivityRegistry, SessionStore};

//! Domain services (business logic)

pub mod activity_registry;
pub mod session_store;

pub use activity_registry::ActivityRegistry;
pub use session_store::SessionStore;

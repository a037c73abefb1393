//! # Activity Infrastructure
//! 
//! Credential source implementations (adapters).

pub mod credentials;

pub use credentials::{InMemoryCredentials, JsonFileCredentials};

//! # Activity Shared
//! 
//! Configuration, telemetry, and constants shared by the activity signup crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::Settings;
pub use error::AppError;

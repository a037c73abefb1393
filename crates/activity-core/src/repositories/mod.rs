//! Repository traits (ports)

pub mod credential_source;

pub use credential_source::{CredentialSource, Credentials};

#[cfg(test)]
pub use credential_source::MockCredentialSource;

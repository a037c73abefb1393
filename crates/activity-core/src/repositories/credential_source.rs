//! Teacher credential port

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::DomainError;

/// Username to password.
pub type Credentials = HashMap<String, String>;

/// Supplies the current teacher credential set.
///
/// Implementations are consulted on every login attempt and must not cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn load(&self) -> Result<Credentials, DomainError>;
}

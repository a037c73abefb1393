use activity_core::{CredentialSource, Credentials, DomainError};
use async_trait::async_trait;

/// Fixed credential set held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    credentials: Credentials,
}

impl InMemoryCredentials {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn from_pairs<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            credentials: pairs
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl CredentialSource for InMemoryCredentials {
    async fn load(&self) -> Result<Credentials, DomainError> {
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_pairs() {
        let source = InMemoryCredentials::from_pairs([("daniel", "daniel123")]);
        let credentials = source.load().await.unwrap();
        assert_eq!(credentials.get("daniel").map(String::as_str), Some("daniel123"));
    }
}

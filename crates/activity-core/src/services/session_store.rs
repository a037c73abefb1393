// ============================================================================
// Activity Core - Session Store
// File: crates/activity-core/src/services/session_store.rs
// ============================================================================
//! Teacher authentication and session lifecycle (issue, validate, revoke)

use std::sync::Arc;

use activity_shared::constants::{DEFAULT_SESSION_TTL_HOURS, SESSION_TOKEN_BYTES};
use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::{CurrentUser, Session};
use crate::error::DomainError;
use crate::repositories::CredentialSource;

/// In-memory session table keyed by opaque token.
///
/// Expired sessions are removed lazily when their token is next presented,
/// or in bulk through [`SessionStore::purge_expired`].
pub struct SessionStore {
    credentials: Arc<dyn CredentialSource>,
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self::with_ttl(credentials, Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }

    pub fn with_ttl(credentials: Arc<dyn CredentialSource>, ttl: Duration) -> Self {
        info!("Initializing session store (ttl: {}s)", ttl.num_seconds());
        Self {
            credentials,
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check credentials and open a new session
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Session, DomainError> {
        self.authenticate_at(username, password, Utc::now()).await
    }

    pub async fn authenticate_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, DomainError> {
        let credentials = self.credentials.load().await?;

        match credentials.get(username) {
            Some(expected) if expected == password => {}
            Some(_) => {
                warn!("Login failed: wrong password for: {}", username);
                return Err(DomainError::InvalidCredentials);
            }
            None => {
                warn!("Login failed: unknown user: {}", username);
                return Err(DomainError::InvalidCredentials);
            }
        }

        let session = self.issue(username, now);
        info!(
            "Login successful for: {} (session {}…, expires {})",
            username,
            token_hint(&session.token),
            session.expires_at.to_rfc3339()
        );
        Ok(session)
    }

    fn issue(&self, username: &str, now: DateTime<Utc>) -> Session {
        loop {
            match self.sessions.entry(generate_token()) {
                Entry::Vacant(slot) => {
                    let session =
                        Session::new(slot.key().clone(), username.to_string(), now, self.ttl);
                    slot.insert(session.clone());
                    return session;
                }
                Entry::Occupied(_) => continue,
            }
        }
    }

    /// Resolve a token to its live session
    pub fn validate(&self, token: &str) -> Result<Session, DomainError> {
        self.validate_at(token, Utc::now())
    }

    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Session, DomainError> {
        let session = self
            .sessions
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or(DomainError::Unauthenticated)?;

        if session.is_expired_at(now) {
            self.sessions.remove_if(token, |_, s| s.is_expired_at(now));
            debug!(
                "Session {}… for {} expired, removed",
                token_hint(token),
                session.username
            );
            return Err(DomainError::SessionExpired);
        }

        Ok(session)
    }

    /// Drop the session if present. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str) {
        if let Some((_, session)) = self.sessions.remove(token) {
            info!("Logout for: {} (session {}…)", session.username, token_hint(token));
        }
    }

    pub fn current_user(&self, token: &str) -> Result<CurrentUser, DomainError> {
        self.current_user_at(token, Utc::now())
    }

    pub fn current_user_at(&self, token: &str, now: DateTime<Utc>) -> Result<CurrentUser, DomainError> {
        self.validate_at(token, now)
            .map(|session| CurrentUser::teacher(session.username))
    }

    /// Remove every expired session. Returns number of sessions removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let start_len = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired_at(now));
        let count = start_len.saturating_sub(self.sessions.len());

        if count > 0 {
            info!("Purged {} expired sessions", count);
        }

        count
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn generate_token() -> String {
    let bytes: [u8; SESSION_TOKEN_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

fn token_hint(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

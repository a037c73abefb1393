// ============================================================================
// Activity Core - Session Entity
// File: crates/activity-core/src/domain/session.rs
// Description: Server-side login session with a fixed expiry window
// ============================================================================

use chrono::{DateTime, Duration, Utc};

/// A teacher login. Expiry is fixed at creation and never extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, username: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token,
            username,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Valid up to and including `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn ttl(&self) -> Duration {
        self.expires_at - self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let session = Session::new("t".to_string(), "daniel".to_string(), now, Duration::hours(8));

        assert_eq!(session.ttl(), Duration::hours(8));
        assert!(!session.is_expired_at(now));
        assert!(!session.is_expired_at(session.expires_at));
        assert!(session.is_expired_at(session.expires_at + Duration::milliseconds(1)));
    }
}

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use activity_core::SessionStore;

/// One sweep pass. Returns number of sessions removed.
pub fn sweep(sessions: &SessionStore) -> usize {
    let removed = sessions.purge_expired();
    debug!("Session sweep removed {} expired sessions ({} remain)", removed, sessions.len());
    removed
}

/// Periodic purge of expired sessions that were never presented again.
pub fn spawn_session_sweeper(sessions: Arc<SessionStore>, every: Duration) -> JoinHandle<()> {
    info!("Session sweeper enabled (every {:?})", every);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            sweep(&sessions);
        }
    })
}

// ============================================================================
// Activity Infrastructure - JSON File Credentials
// File: crates/activity-infrastructure/src/credentials/json_file.rs
// ============================================================================
//! Teacher credentials read from a JSON document on every login.
//!
//! Expected shape:
//! `{"teachers": [{"username": "daniel", "password": "..."}]}`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use activity_core::{CredentialSource, Credentials, DomainError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};

#[derive(Debug, Deserialize)]
struct TeachersFile {
    teachers: Vec<TeacherEntry>,
}

#[derive(Debug, Deserialize)]
struct TeacherEntry {
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
pub struct JsonFileCredentials {
    path: PathBuf,
}

impl JsonFileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialSource for JsonFileCredentials {
    /// A missing file yields an empty set so every login fails.
    async fn load(&self) -> Result<Credentials, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Credentials file {} not found, no logins possible", self.path.display());
                return Ok(Credentials::new());
            }
            Err(e) => {
                error!("Failed to read credentials file {}: {}", self.path.display(), e);
                return Err(DomainError::CredentialSource(e.to_string()));
            }
        };

        let parsed: TeachersFile = serde_json::from_str(&raw).map_err(|e| {
            error!("Malformed credentials file {}: {}", self.path.display(), e);
            DomainError::CredentialSource(e.to_string())
        })?;

        debug!("Loaded {} teacher credentials", parsed.teachers.len());
        Ok(parsed
            .teachers
            .into_iter()
            .map(|t| (t.username, t.password))
            .collect())
    }
}

//! Configuration management

use chrono::{Duration, Utc};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_CREDENTIALS_PATH, DEFAULT_SESSION_TTL_HOURS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub static_files: StaticFilesSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub credentials_path: String,
    pub session_ttl_hours: i64,
    /// 0 disables the background sweep; expired sessions are then only
    /// dropped when their token is used.
    pub sweep_interval_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesSettings {
    pub dir: String,
    pub index: String,
}

impl Settings {
    /// Load `.env`, `config/settings.*` (optional) and `APP__*` environment overrides.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::load_from("config/settings")
    }

    pub fn load_from(file: &str) -> Result<Self, AppError> {
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("auth.credentials_path", DEFAULT_CREDENTIALS_PATH)?
            .set_default("auth.session_ttl_hours", DEFAULT_SESSION_TTL_HOURS)?
            .set_default("auth.sweep_interval_seconds", 0)?
            .set_default("static_files.dir", "static")?
            .set_default("static_files.index", "index.html")?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.auth.session_ttl_hours <= 0 {
            return Err(AppError::InvalidSetting(format!(
                "auth.session_ttl_hours must be positive, got {}",
                self.auth.session_ttl_hours
            )));
        }
        let in_range = Duration::try_hours(self.auth.session_ttl_hours)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .is_some();
        if !in_range {
            return Err(AppError::InvalidSetting(format!(
                "auth.session_ttl_hours is out of range, got {}",
                self.auth.session_ttl_hours
            )));
        }
        if self.static_files.index.trim().is_empty() {
            return Err(AppError::InvalidSetting(
                "static_files.index must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Falls back to the default TTL when the hours do not fit a `Duration`.
    pub fn session_ttl(&self) -> Duration {
        Duration::try_hours(self.auth.session_ttl_hours)
            .unwrap_or_else(|| Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load_from("config/does-not-exist").unwrap();
        assert_eq!(settings.auth.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(settings.session_ttl(), Duration::hours(8));
        assert_eq!(settings.auth.credentials_path, "teachers.json");
        assert_eq!(settings.static_files.index, "index.html");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("activity-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[auth]\nsession_ttl_hours = 2\nsweep_interval_seconds = 60\n",
        )
        .unwrap();

        let stem = dir.join("settings");
        let settings = Settings::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.session_ttl(), Duration::hours(2));
        assert_eq!(settings.auth.sweep_interval_seconds, 60);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_rejects_non_positive_ttl() {
        let dir = std::env::temp_dir().join(format!("activity-settings-ttl-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("settings.toml"), "[auth]\nsession_ttl_hours = 0\n").unwrap();

        let stem = dir.join("settings");
        let result = Settings::load_from(stem.to_str().unwrap());
        assert!(matches!(result, Err(AppError::InvalidSetting(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_rejects_ttl_past_representable_time() {
        let dir = std::env::temp_dir().join(format!("activity-settings-big-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("settings.toml"),
            "[auth]\nsession_ttl_hours = 10000000000\n",
        )
        .unwrap();

        let stem = dir.join("settings");
        let result = Settings::load_from(stem.to_str().unwrap());
        assert!(matches!(result, Err(AppError::InvalidSetting(_))));

        std::fs::remove_dir_all(&dir).ok();
    }
}

//! Application-wide constants

pub const DEFAULT_SESSION_TTL_HOURS: i64 = 8;
pub const TEACHER_ROLE: &str = "teacher";
pub const SESSION_TOKEN_BYTES: usize = 32;
pub const DEFAULT_CREDENTIALS_PATH: &str = "teachers.json";
pub const DEFAULT_LOG_FILTER: &str = "info,activity_api=debug,activity_core=debug";

//! Authenticated user entity

use activity_shared::constants::TEACHER_ROLE;
use serde::Serialize;

/// Only one role exists; every authenticated user is a teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => TEACHER_ROLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn teacher(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::Teacher,
        }
    }
}

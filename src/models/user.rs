// src/models/user.rs

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("valid username regex"));

/// Account role. Teachers author challenges, students answer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Teacher => f.write_str("teacher"),
            Role::Student => f.write_str("student"),
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub role: Role,

    pub name: String,

    pub email: String,

    /// Teachers only.
    pub department: Option<String>,

    /// Students only, e.g. "CS 101".
    pub class: Option<String>,

    /// Students only.
    pub semester: Option<u32>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Data needed by the store to append a user. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub class: Option<String>,
    pub semester: Option<u32>,
}

/// DTO for public registration. Always creates a student account.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(
            min = 3,
            max = 50,
            message = "Username length must be between 3 and 50 characters."
        ),
        custom(function = validate_username)
    )]
    pub username: String,
    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub class: Option<String>,
    #[validate(range(min = 1, max = 12))]
    pub semester: Option<u32>,
}

/// DTO for a teacher creating another teacher account.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    #[validate(length(min = 3, max = 50), custom(function = validate_username))]
    pub username: String,
    #[validate(length(min = 4, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub department: Option<String>,
}

fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    if !USERNAME_RE.is_match(username) {
        return Err(validator::ValidationError::new("invalid_username_characters"));
    }
    Ok(())
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    /// Role selected on the login form. When present it must match the account.
    pub role: Option<Role>,
}

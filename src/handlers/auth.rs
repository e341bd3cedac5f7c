// src/handlers/auth.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{CreateTeacherRequest, CreateUserRequest, LoginRequest, NewUser, Role},
    store::SharedStore,
    utils::{
        hash::{hash_password, verify_password},
        jwt::{Claims, sign_jwt},
    },
};

/// Registers a new student.
///
/// Hashes the password using Argon2 before storing it. The role is never taken
/// from the payload; teacher accounts come from `create_teacher`.
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(store): State<SharedStore>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let hashed_password = hash_password(&payload.password)?;

    let user = store
        .insert_user(NewUser {
            username: payload.username,
            password_hash: hashed_password,
            role: Role::Student,
            name: payload.name,
            email: payload.email,
            department: None,
            class: payload.class,
            semester: payload.semester,
        })
        .await?;

    tracing::info!("Registered student '{}' (id {})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Creates a teacher account.
/// Teacher only.
pub async fn create_teacher(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let hashed_password = hash_password(&payload.password)?;

    let user = store
        .insert_user(NewUser {
            username: payload.username,
            password_hash: hashed_password,
            role: Role::Teacher,
            name: payload.name,
            email: payload.email,
            department: payload.department,
            class: None,
            semester: None,
        })
        .await?;

    tracing::info!("Teacher '{}' (id {}) created by {}", user.username, user.id, claims.sub);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates a user and returns a JWT token.
///
/// When the login form sends a role, it must match the account's role.
pub async fn login(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = store
        .find_user_by_username(&payload.username)
        .await?
        .ok_or(AppError::AuthError("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &user.password)? {
        tracing::warn!("Failed login for '{}'", payload.username);
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    if let Some(role) = payload.role {
        if role != user.role {
            return Err(AppError::AuthError(format!("Invalid {} credentials", role)));
        }
    }

    let token = sign_jwt(user.id, user.role, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
        "user": user
    })))
}

/// Returns the authenticated user's profile.
pub async fn me(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = store
        .find_user(claims.user_id()?)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

//! Handlers for account registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::roles::Role;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::jwt::issue_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{MessageResponse, TokenResponse};
use crate::state::AppState;

/// Same message for unknown user and wrong password, so responses do not
/// reveal which usernames exist.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 128, message = "must be 1-128 characters"))]
    pub password: String,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub full_name: String,
}

/// Request body for `POST /login`.
///
/// No length rules: anything that does not match a stored credential is a
/// 401, not a 400.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create a `Writer` account. Returns 201; a taken username is a 400.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if input.username.chars().any(char::is_whitespace) {
        return Err(AppError::Core(CoreError::Validation(
            "username: must not contain whitespace".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        password_hash,
        full_name: input.full_name,
        role: Role::default(),
    };

    let user = UserRepo::create(&state.pool, &create)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Core(CoreError::Validation("Username already exists".into()))
            }
            other => AppError::Database(other),
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login
///
/// Verify credentials and return a bearer token carrying username and role.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(username = %user.username, "Rejected login with wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = issue_token(&user.username, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %user.username, role = %user.role, "User logged in");

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, full_name: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
    }

    #[test]
    fn accepts_typical_registration() {
        assert!(register("alice", "pw123", "Alice A").validate().is_ok());
        assert!(register("bob", "x", "").validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_long_username() {
        assert!(register("", "pw", "A").validate().is_err());
        assert!(register(&"a".repeat(51), "pw", "A").validate().is_err());
        assert!(register(&"a".repeat(50), "pw", "A").validate().is_ok());
    }

    #[test]
    fn rejects_empty_password() {
        let errors = register("alice", "", "A").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn rejects_long_full_name() {
        assert!(register("alice", "pw", &"n".repeat(101)).validate().is_err());
    }
}

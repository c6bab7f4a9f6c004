//! Handlers for the caller's own profile.

use axum::extract::State;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_db::models::user::{UpdateProfile, UserResponse};
use scribe_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `PUT /profile`. A missing `bio` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub full_name: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub bio: String,
}

/// GET /profile
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &auth.username)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &auth.username))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /profile
///
/// Replaces `full_name` and `bio`. The username comes from the token, never
/// from the body.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    let update = UpdateProfile {
        full_name: input.full_name,
        bio: input.bio,
    };

    UserRepo::update_profile(&state.pool, &auth.username, &update)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &auth.username))?;

    tracing::info!(username = %auth.username, "Profile updated");

    Ok(Json(MessageResponse::new("Profile updated successfully")))
}

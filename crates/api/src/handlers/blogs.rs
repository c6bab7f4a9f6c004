//! Handlers for blog posts.
//!
//! Listing is public. Create stamps the caller as author; update and delete
//! go through [`authorize_owner`] so a missing post is always a 404 and
//! someone else's post is always a 403.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_core::error::CoreError;
use scribe_core::ownership::authorize_owner;
use scribe_core::types::DbId;
use scribe_db::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};
use scribe_db::repositories::BlogRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

const BLOG_POST: &str = "Blog post";

/// Request body for `POST /blogs/create`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}

/// Request body for `PUT /blogs/update`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    pub id: DbId,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}

/// Query string for `DELETE /blogs/delete`.
///
/// Kept as a string so a missing id and a malformed id can be told apart.
#[derive(Debug, Deserialize)]
pub struct DeleteBlogParams {
    pub id: Option<String>,
}

impl DeleteBlogParams {
    fn parse_id(&self) -> AppResult<DbId> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing blog ID".into()))?;

        raw.parse()
            .map_err(|_| AppError::BadRequest("Invalid blog ID".into()))
    }
}

/// GET /blogs
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// POST /blogs/create
pub async fn create_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBlogRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let create = CreateBlogPost {
        title: input.title,
        content: input.content,
    };

    let post = BlogRepo::create(&state.pool, &auth.username, &create).await?;

    tracing::info!(blog_id = post.id, author = %post.author, "Blog post created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Blog post created successfully",
            id: post.id,
        }),
    ))
}

/// PUT /blogs/update
///
/// Only the author may replace a post's title and content.
pub async fn update_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateBlogRequest>,
) -> AppResult<Json<MessageResponse>> {
    let existing = BlogRepo::find_by_id(&state.pool, input.id).await?;
    authorize_owner(existing, BLOG_POST, input.id, &auth.username, "update")?;

    let update = UpdateBlogPost {
        title: input.title,
        content: input.content,
    };

    // The row can vanish between the ownership check and the write.
    BlogRepo::update(&state.pool, input.id, &update)
        .await?
        .ok_or_else(|| CoreError::not_found(BLOG_POST, input.id))?;

    tracing::info!(blog_id = input.id, author = %auth.username, "Blog post updated");

    Ok(Json(MessageResponse::new("Blog post updated successfully")))
}

/// DELETE /blogs/delete?id=
///
/// Only the author may delete a post.
pub async fn delete_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DeleteBlogParams>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.parse_id()?;

    let existing = BlogRepo::find_by_id(&state.pool, id).await?;
    authorize_owner(existing, BLOG_POST, id, &auth.username, "delete")?;

    if !BlogRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found(BLOG_POST, id).into());
    }

    tracing::info!(blog_id = id, author = %auth.username, "Blog post deleted");

    Ok(Json(MessageResponse::new("Blog post deleted successfully")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn params(id: Option<&str>) -> DeleteBlogParams {
        DeleteBlogParams {
            id: id.map(String::from),
        }
    }

    #[test]
    fn parses_numeric_id() {
        assert_eq!(params(Some("42")).parse_id().unwrap(), 42);
    }

    #[test]
    fn missing_or_blank_id_is_bad_request() {
        assert_matches!(params(None).parse_id(), Err(AppError::BadRequest(msg)) if msg == "Missing blog ID");
        assert_matches!(params(Some("")).parse_id(), Err(AppError::BadRequest(msg)) if msg == "Missing blog ID");
    }

    #[test]
    fn non_numeric_id_is_bad_request() {
        assert_matches!(params(Some("abc")).parse_id(), Err(AppError::BadRequest(msg)) if msg == "Invalid blog ID");
    }

    #[test]
    fn create_request_requires_title_and_content() {
        let req = CreateBlogRequest {
            title: String::new(),
            content: String::new(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn update_request_limits_title_length() {
        let req = UpdateBlogRequest {
            id: 1,
            title: "t".repeat(256),
            content: "body".into(),
        };
        assert!(req.validate().is_err());
    }
}

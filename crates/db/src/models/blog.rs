//! Blog post entity model and DTOs.

use scribe_core::ownership::Owned;
use scribe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// Username of the creator. Set once on insert.
    pub author: String,
    pub created_at: Timestamp,
}

impl Owned for BlogPost {
    fn owner(&self) -> &str {
        &self.author
    }
}

/// DTO for inserting a blog post. The author comes from the caller's claims.
#[derive(Debug)]
pub struct CreateBlogPost {
    pub title: String,
    pub content: String,
}

/// DTO for updating the mutable fields of a blog post.
#[derive(Debug)]
pub struct UpdateBlogPost {
    pub title: String,
    pub content: String,
}

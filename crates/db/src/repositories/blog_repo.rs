//! Repository for the `blogs` table.

use chrono::Utc;
use scribe_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};

const COLUMNS: &str = "id, title, content, author, created_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a post owned by `author`. `created_at` is stamped here, never
    /// taken from the client.
    pub async fn create(
        pool: &SqlitePool,
        author: &str,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs (title, content, author, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(author)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List every post, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = ?");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update title and content. `id`, `author` and `created_at` are never touched.
    ///
    /// Returns `None` if the row no longer exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET title = ?, content = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

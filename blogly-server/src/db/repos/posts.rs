//! Post repository
//!
//! Handles post CRUD with:
//! - Owner check + insert in one transaction
//! - Delete returning the owner id for the redirect

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewPost, Post};

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List posts for a user, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a single post by id.
    pub async fn get(&self, id: i32) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(id))
    }

    /// Create a post for `user_id`.
    ///
    /// The owner check runs in the same transaction as the insert so a
    /// missing user surfaces as NotFound instead of an FK violation.
    pub async fn create(&self, user_id: i32, post: NewPost) -> Result<Post, DbError> {
        let mut tx = self.pool.begin().await?;

        let user_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

        if !user_exists.0 {
            return Err(DbError::user_not_found(user_id));
        }

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(post)
    }

    /// Overwrite title and content.
    pub async fn update(&self, id: i32, post: NewPost) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(id)
        .bind(&post.title)
        .bind(&post.content)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(id))
    }

    /// Delete a post, returning its owner's id.
    pub async fn delete(&self, id: i32) -> Result<i32, DbError> {
        let owner: Option<(i32,)> =
            sqlx::query_as("DELETE FROM posts WHERE id = $1 RETURNING user_id")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        owner
            .map(|(user_id,)| user_id)
            .ok_or_else(|| DbError::post_not_found(id))
    }
}

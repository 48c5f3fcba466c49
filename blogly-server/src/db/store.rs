//! Storage seam between route handlers and persistence

use async_trait::async_trait;

use crate::models::{NewPost, NewUser, Post, User};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Constraint violation raised by a non-SQL store
    #[error("constraint violation: {constraint}")]
    Constraint { constraint: &'static str },
}

impl DbError {
    pub(crate) fn user_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }

    pub(crate) fn post_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "post",
            id: id.to_string(),
        }
    }
}

/// Persistence operations for users and posts.
///
/// Every method is a single read or write; lookups by id return
/// [`DbError::NotFound`] when the row is missing.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), DbError>;

    /// All users, ordered by last name then first name.
    async fn list_users(&self) -> Result<Vec<User>, DbError>;

    async fn get_user(&self, id: i32) -> Result<User, DbError>;

    async fn create_user(&self, user: NewUser) -> Result<User, DbError>;

    /// Overwrite every mutable field of a user.
    async fn update_user(&self, id: i32, user: NewUser) -> Result<User, DbError>;

    /// Delete a user; their posts go with them.
    async fn delete_user(&self, id: i32) -> Result<(), DbError>;

    /// Posts owned by `user_id`, newest first.
    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError>;

    async fn get_post(&self, id: i32) -> Result<Post, DbError>;

    /// Insert a post for an existing user (NotFound if the user is missing).
    async fn create_post(&self, user_id: i32, post: NewPost) -> Result<Post, DbError>;

    /// Overwrite title and content of a post.
    async fn update_post(&self, id: i32, post: NewPost) -> Result<Post, DbError>;

    /// Delete a post, returning the id of the user who owned it.
    async fn delete_post(&self, id: i32) -> Result<i32, DbError>;

    /// Release connections. Called once at shutdown.
    async fn close(&self) {}
}

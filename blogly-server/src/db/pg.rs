//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{PostRepo, UserRepo};
use super::{BlogStore, DbError};
use crate::models::{NewPost, NewUser, Post, User};

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn get_user(&self, id: i32) -> Result<User, DbError> {
        UserRepo::new(&self.pool).get(id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DbError> {
        UserRepo::new(&self.pool).create(user).await
    }

    async fn update_user(&self, id: i32, user: NewUser) -> Result<User, DbError> {
        UserRepo::new(&self.pool).update(id, user).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), DbError> {
        UserRepo::new(&self.pool).delete(id).await
    }

    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        PostRepo::new(&self.pool).list_for_user(user_id).await
    }

    async fn get_post(&self, id: i32) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).get(id).await
    }

    async fn create_post(&self, user_id: i32, post: NewPost) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).create(user_id, post).await
    }

    async fn update_post(&self, id: i32, post: NewPost) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).update(id, post).await
    }

    async fn delete_post(&self, id: i32) -> Result<i32, DbError> {
        PostRepo::new(&self.pool).delete(id).await
    }

    async fn close(&self) {
        tracing::info!("Closing database pool");
        self.pool.close().await;
    }
}

//! User repository
//!
//! - create/update: single statement with RETURNING
//! - delete: posts are removed by the ON DELETE CASCADE foreign key

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, ordered by last name then first name.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Insert a user. A duplicate first name fails on the unique constraint.
    pub async fn create(&self, user: NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(&user.first_name)
        .bind(user.last_name.as_deref())
        .bind(user.image_url.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Overwrite first name, last name and image URL.
    pub async fn update(&self, id: i32, user: NewUser) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, image_url = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(id)
        .bind(&user.first_name)
        .bind(user.last_name.as_deref())
        .bind(user.image_url.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Delete a user and, via cascade, their posts.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }

        Ok(())
    }
}

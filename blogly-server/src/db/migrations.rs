//! Database migrations for the users and posts tables

use sqlx::PgPool;

use crate::config::{AvatarConfig, ImagePolicy};

/// Run all migrations. Idempotent; existing tables are left as they are.
pub async fn run(pool: &PgPool, avatars: &AvatarConfig) -> Result<(), sqlx::Error> {
    tracing::info!(image_policy = %avatars.policy, "Running migrations...");

    sqlx::query(&users_table_sql(avatars))
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id SERIAL PRIMARY KEY,
            title VARCHAR(50) NOT NULL,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

/// Drop both tables and recreate them.
pub async fn reset(pool: &PgPool, avatars: &AvatarConfig) -> Result<(), sqlx::Error> {
    tracing::warn!("Dropping posts and users tables");

    sqlx::query("DROP TABLE IF EXISTS posts")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS users")
        .execute(pool)
        .await?;

    run(pool, avatars).await
}

/// DDL for `users`; the `image_url` column follows the image policy.
fn users_table_sql(avatars: &AvatarConfig) -> String {
    let image_column = match avatars.policy {
        ImagePolicy::Nullable => "image_url VARCHAR(300)".to_string(),
        // DDL can't take bind parameters, so quote the literal by hand
        ImagePolicy::Required => format!(
            "image_url VARCHAR(300) NOT NULL DEFAULT '{}'",
            avatars.placeholder_url.replace('\'', "''")
        ),
    };

    format!(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL UNIQUE,
            last_name VARCHAR(50),
            {image_column}
        )
        "#
    )
}

//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use blogly_server::db::{create_pool, migrations};
use blogly_server::{BloglyConfig, ImagePolicy};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// How blank image URLs are stored: nullable or required
    #[arg(long)]
    pub image_policy: Option<ImagePolicy>,

    /// Drop the posts and users tables before recreating them
    #[arg(long)]
    pub reset: bool,
}

/// Create (or recreate) the users and posts tables
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let mut config = BloglyConfig::load().context("Failed to load configuration")?;
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    if let Some(policy) = args.image_policy {
        config.avatar.policy = policy;
    }

    let pool = create_pool(&config.database.url)
        .await
        .context("Failed to create database pool")?;

    let result = if args.reset {
        migrations::reset(&pool, &config.avatar).await
    } else {
        migrations::run(&pool, &config.avatar).await
    };
    pool.close().await;

    result.context("Migration failed")?;
    println!("✅ Schema ready (image policy: {})", config.avatar.policy);
    Ok(())
}

//! HTTP server command
//!
//! Runs the blogly server against PostgreSQL (or the in-memory store).

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use blogly_server::db::{migrations, pool::create_pool_with_options};
use blogly_server::http::{run_server, ServerConfig};
use blogly_server::{BlogStore, BloglyConfig, ImagePolicy, MemoryStore, PgStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config/environment)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pool connections
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: Option<u32>,

    /// How blank image URLs are stored: nullable or required
    #[arg(long)]
    pub image_policy: Option<ImagePolicy>,

    /// Placeholder avatar URL
    #[arg(long)]
    pub default_image_url: Option<String>,

    /// Keep everything in memory instead of PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub memory: bool,
}

impl ServeArgs {
    /// Apply flags on top of the loaded configuration.
    pub fn apply(&self, mut config: BloglyConfig) -> BloglyConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(max) = self.max_connections {
            config.database.max_connections = max;
        }
        if let Some(policy) = self.image_policy {
            config.avatar.policy = policy;
        }
        if let Some(url) = &self.default_image_url {
            config.avatar.placeholder_url = url.clone();
        }
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.apply(BloglyConfig::load().context("Failed to load configuration")?);

    let store: Arc<dyn BlogStore> = if args.memory {
        tracing::warn!("Using in-memory store; data will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        let pool = create_pool_with_options(&config.database.url, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool, &config.avatar)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PgStore::new(pool))
    };

    tracing::info!(image_policy = %config.avatar.policy, "Starting blogly server on {}", config.bind_addr);

    let server_config = ServerConfig {
        bind_addr: config.bind_addr,
        avatars: config.avatar,
    };

    // Run server (blocks until shutdown)
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs::parse_from([
            "serve",
            "--bind",
            "0.0.0.0:8000",
            "--image-policy",
            "required",
        ]);

        let config = args.apply(BloglyConfig::default());
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.avatar.policy, ImagePolicy::Required);
        assert_eq!(config.database, BloglyConfig::default().database);
    }

    #[test]
    fn rejects_zero_max_connections() {
        assert!(ServeArgs::try_parse_from(["serve", "--max-connections", "0"]).is_err());

        let args = ServeArgs::parse_from(["serve", "--max-connections", "12"]);
        assert_eq!(args.apply(BloglyConfig::default()).database.max_connections, 12);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(ServeArgs::try_parse_from(["serve", "--image-policy", "maybe"]).is_err());
    }
}

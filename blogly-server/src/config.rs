//! Blogly configuration - file, environment, and defaults
//!
//! Values are layered, later sources winning:
//! 1. Built-in defaults
//! 2. `~/.blogly/config.toml` (or the file named by `BLOGLY_CONFIG`)
//! 3. Environment variables:
//!    - `DATABASE_URL`
//!    - `BLOGLY_BIND` (e.g. `127.0.0.1:5000`)
//!    - `BLOGLY_MAX_CONNECTIONS`
//!    - `BLOGLY_IMAGE_POLICY` (`nullable` | `required`)
//!    - `BLOGLY_DEFAULT_IMAGE_URL`
//!
//! Command-line flags are applied on top by the binary.

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Avatar shown for users without an image
pub const DEFAULT_PLACEHOLDER_URL: &str =
    "https://api.time.com/wp-content/uploads/2014/09/macaca_nigra_self-portrait_rotated_and_cropped.jpg";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How `users.image_url` is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePolicy {
    /// Column is nullable; blank input is stored as NULL and the placeholder
    /// is substituted when rendering.
    #[default]
    Nullable,
    /// Column is `NOT NULL DEFAULT <placeholder>`; blank input is stored as
    /// the placeholder.
    Required,
}

impl ImagePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nullable => "nullable",
            Self::Required => "required",
        }
    }
}

impl fmt::Display for ImagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nullable" => Ok(Self::Nullable),
            "required" => Ok(Self::Required),
            other => Err(format!(
                "unknown image policy '{}' (expected 'nullable' or 'required')",
                other
            )),
        }
    }
}

/// Avatar handling for users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub policy: ImagePolicy,
    pub placeholder_url: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            policy: ImagePolicy::default(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/blogly".to_string(),
            max_connections: crate::db::pool::DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloglyConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub avatar: AvatarConfig,
}

impl Default for BloglyConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database: DatabaseConfig::default(),
            avatar: AvatarConfig::default(),
        }
    }
}

impl BloglyConfig {
    /// Config file location: `$BLOGLY_CONFIG` or `~/.blogly/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("BLOGLY_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".blogly")
            .join("config.toml")
    }

    /// Load defaults, then the config file (if present), then environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        config.with_env_overrides(|var| std::env::var(var).ok())
    }

    /// Parse a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }

        if let Some(value) = lookup("BLOGLY_BIND") {
            self.bind_addr = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "BLOGLY_BIND",
                value,
            })?;
        }

        if let Some(value) = lookup("BLOGLY_MAX_CONNECTIONS") {
            self.database.max_connections = value
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidEnv {
                    var: "BLOGLY_MAX_CONNECTIONS",
                    value,
                })?;
        }

        if let Some(value) = lookup("BLOGLY_IMAGE_POLICY") {
            self.avatar.policy = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "BLOGLY_IMAGE_POLICY",
                value,
            })?;
        }

        if let Some(url) = lookup("BLOGLY_DEFAULT_IMAGE_URL") {
            self.avatar.placeholder_url = url;
        }

        Ok(self)
    }

    /// Render as TOML (for `blogly config show`).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = BloglyConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.avatar.policy, ImagePolicy::Nullable);
        assert_eq!(config.avatar.placeholder_url, DEFAULT_PLACEHOLDER_URL);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
bind_addr = "0.0.0.0:8080"

[avatar]
policy = "required"
"#
        )
        .unwrap();

        let config = BloglyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.avatar.policy, ImagePolicy::Required);
        assert_eq!(config.avatar.placeholder_url, DEFAULT_PLACEHOLDER_URL);
        assert_eq!(config.database, DatabaseConfig::default());
    }

    #[test]
    fn bad_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = 12").unwrap();

        let err = BloglyConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let config = BloglyConfig::default()
            .with_env_overrides(env(&[
                ("DATABASE_URL", "postgres://db/blogly_test"),
                ("BLOGLY_BIND", "127.0.0.1:9000"),
                ("BLOGLY_MAX_CONNECTIONS", "2"),
                ("BLOGLY_IMAGE_POLICY", "Required"),
                ("BLOGLY_DEFAULT_IMAGE_URL", "https://example.com/x.png"),
            ]))
            .unwrap();

        assert_eq!(config.database.url, "postgres://db/blogly_test");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.avatar.policy, ImagePolicy::Required);
        assert_eq!(config.avatar.placeholder_url, "https://example.com/x.png");
    }

    #[test]
    fn invalid_env_is_rejected() {
        let err = BloglyConfig::default()
            .with_env_overrides(env(&[("BLOGLY_IMAGE_POLICY", "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "BLOGLY_IMAGE_POLICY", .. }));

        let err = BloglyConfig::default()
            .with_env_overrides(env(&[("BLOGLY_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn toml_round_trips_policy() {
        let mut config = BloglyConfig::default();
        config.avatar.policy = ImagePolicy::Required;

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("policy = \"required\""));
        assert_eq!(toml::from_str::<BloglyConfig>(&rendered).unwrap(), config);
    }
}

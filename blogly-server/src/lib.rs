//! blogly-server: users and their posts, served as HTML forms
//!
//! Route handlers decode and validate form input, make a single call
//! against a [`db::BlogStore`], then redirect or render a page.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use config::{AvatarConfig, BloglyConfig, ImagePolicy};
pub use db::{BlogStore, DbError, MemoryStore, PgStore};
pub use http::{build_router, run_server, AppState, ServerConfig};

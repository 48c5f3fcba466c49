//! Database layer - connection pool, migrations, and stores
//!
//! # Design Principles
//!
//! - Handlers talk to a [`BlogStore`], never to a pool directly
//! - The store is built explicitly at startup and closed at shutdown
//! - Posts are fetched with an explicit `user_id` query, no implicit traversal
//! - Rely on DB constraints (unique first name, FK cascade) rather than
//!   check-then-write, except where the owner must exist for a 404

pub mod memory;
pub mod migrations;
pub mod pg;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pg::PgStore;
pub use pool::create_pool;
pub use store::{BlogStore, DbError};

//! Repository implementations for PostgreSQL access
//!
//! Each repository borrows the pool and issues one statement per call,
//! using `RETURNING` instead of a follow-up read.

pub mod posts;
pub mod users;

pub use posts::PostRepo;
pub use users::UserRepo;

//! Domain records and form decoding
//!
//! Form bodies are decoded into `UserForm`/`PostForm` and validated into
//! `NewUser`/`NewPost` before anything is written.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod post;

pub use validation::ValidationError;
pub use user::{NewUser, User, UserForm};
pub use post::{NewPost, Post, PostForm};

//! Root redirect and fallback page

use std::sync::Arc;

use axum::{routing::get, Router};

use super::Found;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET / - redirect to the user list
async fn home() -> Found {
    Found::to("/users")
}

/// Any unmatched path
pub async fn not_found() -> ApiError {
    ApiError::NotFound {
        resource: "page",
        id: String::new(),
    }
}

/// Home routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}

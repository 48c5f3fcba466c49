//! Route handlers organized by resource

pub mod health;
pub mod home;
pub mod posts;
pub mod users;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// 302 Found redirect (`Redirect::to` answers 303).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found(pub String);

impl Found {
    pub fn to(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.0)]).into_response()
    }
}

//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Parse the single `{id}` path segment, treating anything that isn't an
/// integer as a missing resource.
async fn id_from_path<S>(
    parts: &mut Parts,
    state: &S,
    resource: &'static str,
) -> Result<i32, ApiError>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|_| ApiError::NotFound {
            resource,
            id: String::new(),
        })?;

    raw.parse::<i32>().map_err(|_| ApiError::NotFound { resource, id: raw })
}

/// User id from the path
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_from_path(parts, state, "user").await.map(Self)
    }
}

/// Post id from the path
pub struct PostId(pub i32);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_from_path(parts, state, "post").await.map(Self)
    }
}

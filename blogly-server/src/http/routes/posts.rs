//! Post endpoints

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
    Router,
};

use super::Found;
use crate::http::error::ApiError;
use crate::http::extractors::{PostId, UserId};
use crate::http::server::AppState;
use crate::models::{NewPost, PostForm};
use crate::views;

/// GET /users/{id}/posts/new - create form bound to the owner
async fn new_post_form(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Html<String>, ApiError> {
    let author = state.store.get_user(user_id).await?;
    Ok(Html(views::posts::new_form(&author)))
}

/// POST /users/{id}/posts/new - create a post for the user
async fn create_post(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Form(form): Form<PostForm>,
) -> Result<Found, ApiError> {
    let new_post = NewPost::from_form(&form)?;
    let post = state.store.create_post(user_id, new_post).await?;
    tracing::info!(post_id = post.id, user_id, "Created post");

    Ok(Found(format!("/users/{}", user_id)))
}

/// GET /posts/{id} - a single post with its author
async fn show_post(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
) -> Result<Html<String>, ApiError> {
    let post = state.store.get_post(id).await?;
    let author = state.store.get_user(post.user_id).await?;

    Ok(Html(views::posts::detail(&post, &author)))
}

/// GET /posts/{id}/edit - pre-filled edit form
async fn edit_post_form(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
) -> Result<Html<String>, ApiError> {
    let post = state.store.get_post(id).await?;
    Ok(Html(views::posts::edit_form(&post)))
}

/// POST /posts/{id}/edit - overwrite title and content
async fn update_post(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
    Form(form): Form<PostForm>,
) -> Result<Found, ApiError> {
    let changes = NewPost::from_form(&form)?;
    state.store.update_post(id, changes).await?;
    tracing::info!(post_id = id, "Updated post");

    Ok(Found(format!("/posts/{}", id)))
}

/// POST /posts/{id}/delete - delete a post, back to its owner
async fn delete_post(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
) -> Result<Found, ApiError> {
    let user_id = state.store.delete_post(id).await?;
    tracing::info!(post_id = id, user_id, "Deleted post");

    Ok(Found(format!("/users/{}", user_id)))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/posts/new", get(new_post_form).post(create_post))
        .route("/posts/{id}", get(show_post))
        .route("/posts/{id}/edit", get(edit_post_form).post(update_post))
        .route("/posts/{id}/delete", post(delete_post))
}

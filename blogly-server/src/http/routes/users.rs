//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
    Router,
};

use super::Found;
use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::server::AppState;
use crate::models::{NewUser, UserForm};
use crate::views;

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Html(views::users::list(&users)))
}

/// GET /users/new - empty create form
async fn new_user_form() -> Html<String> {
    Html(views::users::new_form())
}

/// POST /users/new - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UserForm>,
) -> Result<Found, ApiError> {
    let new_user = NewUser::from_form(&form, &state.avatars)?;
    let user = state.store.create_user(new_user).await?;
    tracing::info!(user_id = user.id, "Created user");

    Ok(Found::to("/users"))
}

/// GET /users/{id} - user with their posts
async fn show_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Html<String>, ApiError> {
    let user = state.store.get_user(id).await?;
    let posts = state.store.list_posts_for_user(id).await?;

    Ok(Html(views::users::detail(&user, &posts, &state.avatars)))
}

/// GET /users/{id}/edit - pre-filled edit form
async fn edit_user_form(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Html<String>, ApiError> {
    let user = state.store.get_user(id).await?;
    Ok(Html(views::users::edit_form(&user)))
}

/// POST /users/{id}/edit - overwrite all user fields
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    Form(form): Form<UserForm>,
) -> Result<Found, ApiError> {
    let changes = NewUser::from_form(&form, &state.avatars)?;
    state.store.update_user(id, changes).await?;
    tracing::info!(user_id = id, "Updated user");

    Ok(Found(format!("/users/{}", id)))
}

/// POST /users/{id}/delete - delete a user and their posts
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Found, ApiError> {
    state.store.delete_user(id).await?;
    tracing::info!(user_id = id, "Deleted user");

    Ok(Found::to("/users"))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/new", get(new_user_form).post(create_user))
        .route("/users/{id}", get(show_user))
        .route("/users/{id}/edit", get(edit_user_form).post(update_user))
        .route("/users/{id}/delete", post(delete_user))
}

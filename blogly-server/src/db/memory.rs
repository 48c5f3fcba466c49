//! In-process store for tests and `blogly serve --memory`
//!
//! Mirrors the PostgreSQL schema's guarantees: unique first names, posts
//! must reference an existing user, and deleting a user cascades.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{BlogStore, DbError};
use crate::models::{NewPost, NewUser, Post, User};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    last_user_id: i32,
    last_post_id: i32,
}

impl Tables {
    fn check_unique_first_name(&self, first_name: &str, except: Option<i32>) -> Result<(), DbError> {
        let taken = self
            .users
            .values()
            .any(|u| u.first_name == first_name && Some(u.id) != except);

        if taken {
            return Err(DbError::Constraint {
                constraint: "users_first_name_key",
            });
        }
        Ok(())
    }
}

/// Store holding both tables in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        // Postgres sorts NULL last names after every non-NULL one
        users.sort_by(|a, b| {
            (a.last_name.is_none(), &a.last_name, &a.first_name)
                .cmp(&(b.last_name.is_none(), &b.last_name, &b.first_name))
        });
        Ok(users)
    }

    async fn get_user(&self, id: i32) -> Result<User, DbError> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DbError> {
        let mut tables = self.tables.write().await;
        tables.check_unique_first_name(&user.first_name, None)?;

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i32, user: NewUser) -> Result<User, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Err(DbError::user_not_found(id));
        }
        tables.check_unique_first_name(&user.first_name, Some(id))?;

        let updated = User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        };
        tables.users.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_user(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables
            .users
            .remove(&id)
            .ok_or_else(|| DbError::user_not_found(id))?;
        tables.posts.retain(|_, post| post.user_id != id);
        Ok(())
    }

    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(posts)
    }

    async fn get_post(&self, id: i32) -> Result<Post, DbError> {
        let tables = self.tables.read().await;
        tables
            .posts
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::post_not_found(id))
    }

    async fn create_post(&self, user_id: i32, post: NewPost) -> Result<Post, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(DbError::user_not_found(user_id));
        }

        tables.last_post_id += 1;
        let post = Post {
            id: tables.last_post_id,
            title: post.title,
            content: post.content,
            created_at: Utc::now(),
            user_id,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: i32, post: NewPost) -> Result<Post, DbError> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .posts
            .get_mut(&id)
            .ok_or_else(|| DbError::post_not_found(id))?;

        existing.title = post.title;
        existing.content = post.content;
        Ok(existing.clone())
    }

    async fn delete_post(&self, id: i32) -> Result<i32, DbError> {
        let mut tables = self.tables.write().await;
        tables
            .posts
            .remove(&id)
            .map(|post| post.user_id)
            .ok_or_else(|| DbError::post_not_found(id))
    }
}

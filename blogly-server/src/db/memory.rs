//! In-process store
//!
//! Mirrors the PostgreSQL schema rules: sequential ids, the foreign key on
//! `posts.user_id`, the `VARCHAR` column widths and the cascade from users
//! to posts. Backs `blogly serve --ephemeral` and the router tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::repos::DbError;
use super::store::BlogStore;
use crate::models::{Post, PostFields, User, UserFields, MAX_NAME_LEN, MAX_TITLE_LEN};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    last_user_id: i32,
    last_post_id: i32,
}

/// Store that keeps both tables in memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same limit Postgres applies to a `VARCHAR(max)` column, counted in characters.
fn check_width(column: &str, value: &str, max: usize) -> Result<(), DbError> {
    if value.chars().count() > max {
        return Err(DbError::Constraint {
            message: format!("value too long for {} (max {} characters)", column, max),
        });
    }
    Ok(())
}

fn check_user(fields: &UserFields) -> Result<(), DbError> {
    check_width("users.first_name", &fields.first_name, MAX_NAME_LEN)?;
    check_width("users.last_name", &fields.last_name, MAX_NAME_LEN)
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    posts
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        Ok(users)
    }

    async fn get_user(&self, id: i32) -> Result<User, DbError> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("user", id))
    }

    async fn insert_user(&self, fields: UserFields) -> Result<User, DbError> {
        check_user(&fields)?;
        let mut tables = self.tables.write().await;
        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            image_url: fields.image_url,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i32, fields: UserFields) -> Result<User, DbError> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("user", id))?;
        check_user(&fields)?;
        user.first_name = fields.first_name;
        user.last_name = fields.last_name;
        user.image_url = fields.image_url;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(DbError::not_found("user", id));
        }
        tables.posts.retain(|_, post| post.user_id != id);
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        let tables = self.tables.read().await;
        Ok(newest_first(tables.posts.values().cloned().collect()))
    }

    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        let tables = self.tables.read().await;
        let posts = tables
            .posts
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(posts))
    }

    async fn get_post(&self, id: i32) -> Result<Post, DbError> {
        let tables = self.tables.read().await;
        tables
            .posts
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("post", id))
    }

    async fn insert_post(&self, user_id: i32, fields: PostFields) -> Result<Post, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(DbError::Constraint {
                message: format!("posts.user_id {} has no matching user", user_id),
            });
        }
        check_width("posts.title", &fields.title, MAX_TITLE_LEN)?;
        tables.last_post_id += 1;
        let post = Post {
            id: tables.last_post_id,
            user_id,
            title: fields.title,
            content: fields.content,
            created_at: Utc::now(),
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: i32, fields: PostFields) -> Result<Post, DbError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("post", id))?;
        check_width("posts.title", &fields.title, MAX_TITLE_LEN)?;
        post.title = fields.title;
        post.content = fields.content;
        Ok(post.clone())
    }

    async fn delete_post(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("post", id))
    }
}

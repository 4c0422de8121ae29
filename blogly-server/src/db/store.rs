//! Persistence gateway used by the HTTP layer
//!
//! Handlers hold an `Arc<dyn BlogStore>` built by whoever starts the
//! server (CLI or test), so nothing reaches for a global connection.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, PostRepo, UserRepo};
use crate::models::{Post, PostFields, User, UserFields};

/// Record storage for users and their posts.
///
/// Every method that takes an id returns [`DbError::NotFound`] when no row
/// matches. Mutations commit before returning.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, DbError>;
    async fn get_user(&self, id: i32) -> Result<User, DbError>;
    async fn insert_user(&self, fields: UserFields) -> Result<User, DbError>;
    async fn update_user(&self, id: i32, fields: UserFields) -> Result<User, DbError>;
    /// Removes the user and every post it owns.
    async fn delete_user(&self, id: i32) -> Result<(), DbError>;

    async fn list_posts(&self) -> Result<Vec<Post>, DbError>;
    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError>;
    async fn get_post(&self, id: i32) -> Result<Post, DbError>;
    async fn insert_post(&self, user_id: i32, fields: PostFields) -> Result<Post, DbError>;
    async fn update_post(&self, id: i32, fields: PostFields) -> Result<Post, DbError>;
    async fn delete_post(&self, id: i32) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn get_user(&self, id: i32) -> Result<User, DbError> {
        UserRepo::new(&self.pool).get(id).await
    }

    async fn insert_user(&self, fields: UserFields) -> Result<User, DbError> {
        UserRepo::new(&self.pool).create(fields).await
    }

    async fn update_user(&self, id: i32, fields: UserFields) -> Result<User, DbError> {
        UserRepo::new(&self.pool).update(id, fields).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), DbError> {
        UserRepo::new(&self.pool).delete(id).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        PostRepo::new(&self.pool).list().await
    }

    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        PostRepo::new(&self.pool).list_for_user(user_id).await
    }

    async fn get_post(&self, id: i32) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).get(id).await
    }

    async fn insert_post(&self, user_id: i32, fields: PostFields) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).create(user_id, fields).await
    }

    async fn update_post(&self, id: i32, fields: PostFields) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).update(id, fields).await
    }

    async fn delete_post(&self, id: i32) -> Result<(), DbError> {
        PostRepo::new(&self.pool).delete(id).await
    }
}

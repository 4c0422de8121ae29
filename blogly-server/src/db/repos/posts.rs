//! Post repository
//!
//! Posts are always listed newest first. `created_at` is assigned by the
//! database on insert.

use sqlx::PgPool;

use super::DbError;
use crate::models::{Post, PostFields};

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, title, content, created_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, title, content, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn get(&self, id: i32) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, title, content, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("post", id))
    }

    /// Insert a post for `user_id`.
    ///
    /// A `user_id` with no matching user fails the foreign key and comes
    /// back as [`DbError::Constraint`].
    pub async fn create(&self, user_id: i32, fields: PostFields) -> Result<Post, DbError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content, created_at
            "#,
        )
        .bind(user_id)
        .bind(&fields.title)
        .bind(&fields.content)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    pub async fn update(&self, id: i32, fields: PostFields) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING id, user_id, title, content, created_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("post", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("post", id));
        }
        Ok(())
    }
}

//! User repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{User, UserFields};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every user, ordered by last then first name.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            ORDER BY last_name, first_name, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by ID.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    pub async fn create(&self, fields: UserFields) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Overwrite all mutable columns.
    pub async fn update(&self, id: i32, fields: UserFields) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, image_url = $3
            WHERE id = $4
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.image_url)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Delete a user. Owned posts go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user", id));
        }
        Ok(())
    }
}

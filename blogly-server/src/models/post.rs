//! Post record and its form payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Width of `posts.title`
pub const MAX_TITLE_LEN: usize = 50;

/// Post record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Raw add/edit form body
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// Column values written by insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
}

impl From<PostForm> for PostFields {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
        }
    }
}

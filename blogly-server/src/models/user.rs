//! User record and its form payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Image shown for users created without one
pub const DEFAULT_IMAGE_URL: &str =
    "https://rithmapp.s3-us-west-2.amazonaws.com/assets/meet-the-instructor-joel-burton-0.jpg";

/// Width of `users.first_name` and `users.last_name`
pub const MAX_NAME_LEN: usize = 30;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    /// "First Last", as shown in page headings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw add/edit form body. Every key is required, values may be blank.
#[derive(Debug, Clone, Deserialize)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

/// Column values written by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserFields {
    /// Fields for a new user. A blank image URL becomes [`DEFAULT_IMAGE_URL`].
    pub fn for_insert(form: UserForm) -> Self {
        let image_url = if form.image_url.trim().is_empty() {
            DEFAULT_IMAGE_URL.to_owned()
        } else {
            form.image_url
        };

        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            image_url,
        }
    }

    /// Fields for an edit: all three columns are overwritten verbatim.
    pub fn for_update(form: UserForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            image_url: form.image_url,
        }
    }
}

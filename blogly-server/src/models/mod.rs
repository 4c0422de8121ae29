//! Domain models and form payloads
//!
//! Form payloads only check that every required key is present; blank
//! values are accepted as-is. Write-time defaults live here, not in the
//! schema.

pub mod post;
pub mod user;

pub use post::{Post, PostFields, PostForm, MAX_TITLE_LEN};
pub use user::{User, UserFields, UserForm, DEFAULT_IMAGE_URL, MAX_NAME_LEN};

//! blogly-server: users and their posts over HTML forms
//!
//! The crate is layered bottom-up:
//! - [`models`]: record shapes and form payloads
//! - [`db`]: PostgreSQL repositories, migrations and the [`BlogStore`] seam
//! - [`http`]: axum routes, extractors and error pages
//! - [`render`]: embedded tera templates

pub mod db;
pub mod http;
pub mod models;
pub mod render;
pub mod state;

pub use db::{BlogStore, DbError, MemoryStore, PgStore};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;

//! Database layer - connection pool, repositories and the store seam
//!
//! # Design Principles
//!
//! - Handlers never see a pool; they get an injected [`BlogStore`]
//! - One statement per mutation, committed immediately
//! - Rely on DB constraints (FK, column widths) instead of check-then-insert
//! - Deleting a user cascades to that user's posts

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, run_migrations, DEFAULT_MAX_CONNECTIONS};
pub use repos::{DbError, PostRepo, UserRepo};
pub use store::{BlogStore, PgStore};

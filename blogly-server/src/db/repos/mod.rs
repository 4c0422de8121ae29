//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! call. Missing rows surface as [`DbError::NotFound`].

pub mod posts;
pub mod users;

pub use posts::PostRepo;
pub use users::UserRepo;

/// Postgres SQLSTATE for a value too long for its column
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violation: {message}")]
    Constraint { message: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            let too_long = db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION);
            if db_err.is_foreign_key_violation() || too_long {
                return Self::Constraint {
                    message: db_err.message().to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}

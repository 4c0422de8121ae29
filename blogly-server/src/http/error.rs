//! API error types with IntoResponse
//!
//! Errors are converted to small HTML pages with matching status codes.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;

/// Request-level failure with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Form body could not be read, e.g. a required field is absent (400)
    BadRequest { message: String },

    /// No record behind the requested id (404)
    NotFound { resource: &'static str, id: String },

    /// Database error, including constraint violations (500, logged)
    Database(DbError),

    /// Template failed to render (500, logged)
    Render(tera::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::BadRequest { message } => message.clone(),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "an internal error occurred".to_owned()
            }
            Self::Render(e) => {
                tracing::error!(error = ?e, "Template render error");
                "an internal error occurred".to_owned()
            }
        };

        (status, error_page(status, &message)).into_response()
    }
}

fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n<h1>{code} {title}</h1>\n<p>{message}</p>\n<a href=\"/users\">Back to users</a>\n</body>\n</html>\n",
        code = status.as_u16(),
        title = title,
        message = tera::escape_html(message),
    ))
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<tera::Error> for ApiError {
    fn from(e: tera::Error) -> Self {
        Self::Render(e)
    }
}

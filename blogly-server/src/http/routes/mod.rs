//! Route handlers organized by resource

pub mod home;
pub mod posts;
pub mod users;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tera::Context;

use crate::http::error::ApiError;
use crate::state::AppState;

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_owned())]).into_response()
}

/// Render a template into a `200` HTML page.
pub(crate) fn page(state: &AppState, name: &str, context: &Context) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates().render(name, context)?))
}

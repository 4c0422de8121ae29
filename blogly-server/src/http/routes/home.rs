//! Root redirect and fallback

use axum::http::Uri;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use super::found;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET / - the user list is the home page
async fn home() -> Response {
    found("/users")
}

/// Any unrouted path
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "page",
        id: uri.path().to_owned(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

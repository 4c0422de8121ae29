//! User pages

use axum::{
    extract::State,
    response::{Html, Response},
    routing::{get, post},
    Router,
};
use tera::Context;

use super::{found, page};
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{FormData, RecordId};
use crate::models::{UserFields, UserForm};
use crate::state::AppState;

/// GET /users - list all users
async fn list_users(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let users = state.store().list_users().await?;

    let mut context = Context::new();
    context.insert("users", &users);
    page(&state, "users/list.html", &context)
}

/// GET /users/new - add-user form
async fn new_user_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page(&state, "users/new.html", &Context::new())
}

/// POST /users/new - create a user, blank image gets the placeholder
async fn create_user(
    State(state): State<AppState>,
    FormData(form): FormData<UserForm>,
) -> Result<Response, ApiError> {
    let user = state.store().insert_user(UserFields::for_insert(form)).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok(found(&format!("/users/{}", user.id)))
}

/// GET /users/{id} - user detail with their posts
async fn show_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>, ApiError> {
    let user = state.store().get_user(id).await?;
    let posts = state.store().list_posts_for_user(id).await?;

    let mut context = Context::new();
    context.insert("user", &user);
    context.insert("posts", &posts);
    page(&state, "users/detail.html", &context)
}

/// GET /users/{id}/edit - edit form prefilled with current values
async fn edit_user_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>, ApiError> {
    let user = state.store().get_user(id).await?;

    let mut context = Context::new();
    context.insert("user", &user);
    page(&state, "users/edit.html", &context)
}

/// POST /users/{id}/edit - overwrite every field as submitted
///
/// The user is looked up before the form is read, so an unknown id is a 404
/// even when the body is incomplete.
async fn update_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    form: Result<FormData<UserForm>, ApiError>,
) -> Result<Response, ApiError> {
    state.store().get_user(id).await?;
    let FormData(form) = form?;

    let user = state
        .store()
        .update_user(id, UserFields::for_update(form))
        .await?;
    tracing::info!(user_id = user.id, "user updated");

    Ok(found(&format!("/users/{}", user.id)))
}

/// POST /users/{id}/delete - delete user and their posts; missing ids are ignored
async fn delete_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Response, ApiError> {
    match state.store().delete_user(id).await {
        Ok(()) => tracing::info!(user_id = id, "user deleted"),
        Err(DbError::NotFound { .. }) => {
            tracing::debug!(user_id = id, "delete of missing user ignored")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(found("/users"))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/new", get(new_user_form).post(create_user))
        .route("/users/{id}", get(show_user))
        .route("/users/{id}/edit", get(edit_user_form).post(update_user))
        .route("/users/{id}/delete", post(delete_user))
}

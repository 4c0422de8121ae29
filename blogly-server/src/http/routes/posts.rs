//! Post pages, including the user-scoped "new post" form

use axum::{
    extract::State,
    response::{Html, Response},
    routing::{get, post},
    Router,
};
use tera::Context;

use super::{found, page};
use crate::http::error::ApiError;
use crate::http::extractors::{FormData, RecordId};
use crate::models::PostForm;
use crate::state::AppState;

/// GET /posts - every post, newest first
async fn list_posts(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let posts = state.store().list_posts().await?;

    let mut context = Context::new();
    context.insert("posts", &posts);
    page(&state, "posts/list.html", &context)
}

/// GET /users/{id}/posts/new - post form for a user
async fn new_post_form(
    State(state): State<AppState>,
    RecordId(user_id): RecordId,
) -> Result<Html<String>, ApiError> {
    let user = state.store().get_user(user_id).await?;

    let mut context = Context::new();
    context.insert("user", &user);
    page(&state, "posts/new.html", &context)
}

/// POST /users/{id}/posts/new - create a post owned by the user
async fn create_post(
    State(state): State<AppState>,
    RecordId(user_id): RecordId,
    form: Result<FormData<PostForm>, ApiError>,
) -> Result<Response, ApiError> {
    let user = state.store().get_user(user_id).await?;
    let FormData(form) = form?;
    let post = state.store().insert_post(user.id, form.into()).await?;
    tracing::info!(user_id = user.id, post_id = post.id, "post created");

    Ok(found(&format!("/posts/{}", post.id)))
}

/// GET /posts/{id} - post detail with author
async fn show_post(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>, ApiError> {
    let post = state.store().get_post(id).await?;
    let user = state.store().get_user(post.user_id).await?;

    let mut context = Context::new();
    context.insert("post", &post);
    context.insert("user", &user);
    page(&state, "posts/detail.html", &context)
}

/// GET /posts/{id}/edit - edit form prefilled with current values
async fn edit_post_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>, ApiError> {
    let post = state.store().get_post(id).await?;

    let mut context = Context::new();
    context.insert("post", &post);
    page(&state, "posts/edit.html", &context)
}

/// POST /posts/{id}/edit - overwrite title and content
async fn update_post(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    form: Result<FormData<PostForm>, ApiError>,
) -> Result<Response, ApiError> {
    state.store().get_post(id).await?;
    let FormData(form) = form?;

    let post = state.store().update_post(id, form.into()).await?;
    tracing::info!(post_id = post.id, "post updated");

    Ok(found(&format!("/posts/{}", post.id)))
}

/// POST /posts/{id}/delete - delete and return to the former owner's page
async fn delete_post(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Response, ApiError> {
    let post = state.store().get_post(id).await?;
    state.store().delete_post(post.id).await?;
    tracing::info!(user_id = post.user_id, post_id = post.id, "post deleted");

    Ok(found(&format!("/users/{}", post.user_id)))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/users/{id}/posts/new", get(new_post_form).post(create_post))
        .route("/posts/{id}", get(show_post))
        .route("/posts/{id}/edit", get(edit_post_form).post(update_post))
        .route("/posts/{id}/delete", post(delete_post))
}

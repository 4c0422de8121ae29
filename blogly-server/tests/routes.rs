//! End-to-end page flows through the router, backed by the in-memory store

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;

use blogly_server::models::{PostFields, UserFields, DEFAULT_IMAGE_URL, MAX_TITLE_LEN};
use blogly_server::{build_router, AppState, BlogStore, MemoryStore};

struct TestApp {
    router: Router,
    store: MemoryStore,
    user_id: i32,
    post_id: i32,
}

/// Send handler logs to the test harness, filtered by `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Router seeded with two users and one post owned by the first.
async fn setup() -> TestApp {
    init_tracing();
    let store = MemoryStore::new();

    let user = store
        .insert_user(UserFields::for_insert(blogly_server::models::UserForm {
            first_name: "test1_first".into(),
            last_name: "test1_last".into(),
            image_url: String::new(),
        }))
        .await
        .unwrap();
    store
        .insert_user(UserFields {
            first_name: "test2_first".into(),
            last_name: "test2_last".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        })
        .await
        .unwrap();
    let post = store
        .insert_post(
            user.id,
            PostFields {
                title: "test_title".into(),
                content: "test_content".into(),
            },
        )
        .await
        .unwrap();

    let state = AppState::new(store.clone()).unwrap();
    TestApp {
        router: build_router(state),
        store,
        user_id: user.id,
        post_id: post.id,
    }
}

async fn get(app: &TestApp, uri: &str) -> Response {
    app.router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &TestApp, uri: &str, body: &str) -> Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn location(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::FOUND);
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
        .to_owned()
}

async fn html(response: Response) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// GET `uri`, assert 200 and return the page.
async fn page(app: &TestApp, uri: &str) -> String {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
    html(response).await
}

// === Home ===

#[tokio::test]
async fn root_redirects_to_user_list() {
    let app = setup().await;
    let response = get(&app, "/").await;
    assert_eq!(location(&response), "/users");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = setup().await;
    let response = get(&app, "/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// === Users ===

#[tokio::test]
async fn list_users_shows_names() {
    let app = setup().await;
    let html = page(&app, "/users").await;
    assert!(html.contains("test1_first"));
    assert!(html.contains("test1_last"));
    assert!(html.contains("test2_first"));
}

#[tokio::test]
async fn new_user_form_renders() {
    let app = setup().await;
    let html = page(&app, "/users/new").await;
    assert!(html.contains(r#"<label for="first_name">First Name</label>"#));
}

#[tokio::test]
async fn create_user_with_blank_image_uses_placeholder() {
    let app = setup().await;
    let response = post_form(
        &app,
        "/users/new",
        "first_name=new_first&last_name=new_last&image_url=",
    )
    .await;

    let location = location(&response);
    let id: i32 = location.trim_start_matches("/users/").parse().unwrap();
    let user = app.store.get_user(id).await.unwrap();
    assert_eq!(user.image_url, DEFAULT_IMAGE_URL);

    let html = page(&app, &location).await;
    assert!(html.contains("<h1>new_first new_last</h1>"));
}

#[tokio::test]
async fn create_user_keeps_supplied_image() {
    let app = setup().await;
    let response = post_form(
        &app,
        "/users/new",
        "first_name=a&last_name=b&image_url=http%3A%2F%2Fimg.test%2Fa.png",
    )
    .await;

    let id: i32 = location(&response)
        .trim_start_matches("/users/")
        .parse()
        .unwrap();
    let user = app.store.get_user(id).await.unwrap();
    assert_eq!(user.image_url, "http://img.test/a.png");
}

#[tokio::test]
async fn create_user_missing_field_is_400() {
    let app = setup().await;
    let response = post_form(&app, "/users/new", "first_name=only").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn user_detail_shows_name_and_posts() {
    let app = setup().await;
    let html = page(&app, &format!("/users/{}", app.user_id)).await;
    assert!(html.contains("<h1>test1_first test1_last</h1>"));
    assert!(html.contains("test_title"));
    assert!(html.contains(&format!(r#"href="/posts/{}""#, app.post_id)));
}

#[tokio::test]
async fn missing_user_is_404() {
    let app = setup().await;
    assert_eq!(get(&app, "/users/9999").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/users/9999/edit").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get(&app, "/users/9999/posts/new").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn non_numeric_id_is_404() {
    let app = setup().await;
    assert_eq!(get(&app, "/users/abc").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/posts/abc").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let app = setup().await;
    let html = page(&app, &format!("/users/{}/edit", app.user_id)).await;
    assert!(html.contains(r#"<label for="first_name">First Name</label>"#));
    assert!(html.contains(r#"value="test1_first""#));
}

#[tokio::test]
async fn edit_user_replaces_first_name() {
    let app = setup().await;
    let uri = format!("/users/{}/edit", app.user_id);
    let response = post_form(
        &app,
        &uri,
        "first_name=renamed&last_name=test1_last&image_url=",
    )
    .await;
    assert_eq!(location(&response), format!("/users/{}", app.user_id));

    let html = page(&app, &format!("/users/{}", app.user_id)).await;
    assert!(html.contains("<h1>renamed test1_last</h1>"));
    assert!(!html.contains("test1_first"));
}

#[tokio::test]
async fn edit_user_has_no_image_fallback() {
    let app = setup().await;
    let uri = format!("/users/{}/edit", app.user_id);
    post_form(&app, &uri, "first_name=a&last_name=b&image_url=").await;

    let user = app.store.get_user(app.user_id).await.unwrap();
    assert_eq!(user.image_url, "");
}

#[tokio::test]
async fn edit_missing_user_is_404() {
    let app = setup().await;
    let response = post_form(
        &app,
        "/users/9999/edit",
        "first_name=a&last_name=b&image_url=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_missing_user_with_incomplete_form_is_404() {
    let app = setup().await;
    let response = post_form(&app, "/users/9999/edit", "first_name=a").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_existing_user_with_incomplete_form_is_400() {
    let app = setup().await;
    let uri = format!("/users/{}/edit", app.user_id);
    let response = post_form(&app, &uri, "first_name=a").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let user = app.store.get_user(app.user_id).await.unwrap();
    assert_eq!(user.first_name, "test1_first");
}

#[tokio::test]
async fn delete_user_removes_from_listing_and_cascades() {
    let app = setup().await;
    let response = post_form(&app, &format!("/users/{}/delete", app.user_id), "").await;
    assert_eq!(location(&response), "/users");

    let html = page(&app, "/users").await;
    assert!(!html.contains("test1_first"));
    assert!(html.contains("test2_first"));

    let response = get(&app, &format!("/posts/{}", app.post_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_user_still_redirects() {
    let app = setup().await;
    let response = post_form(&app, "/users/9999/delete", "").await;
    assert_eq!(location(&response), "/users");
}

// === Posts ===

#[tokio::test]
async fn new_post_form_names_the_user() {
    let app = setup().await;
    let html = page(&app, &format!("/users/{}/posts/new", app.user_id)).await;
    assert!(html.contains("Add post for test1_first test1_last"));
}

#[tokio::test]
async fn create_post_then_view_it() {
    let app = setup().await;
    let response = post_form(
        &app,
        &format!("/users/{}/posts/new", app.user_id),
        "title=blah&content=blah+blah",
    )
    .await;

    let location = location(&response);
    assert!(location.starts_with("/posts/"));

    let html = page(&app, &location).await;
    assert!(html.contains("<h1>blah</h1>"));
    assert!(html.contains("blah blah"));
    assert!(html.contains("test1_first test1_last"));
}

#[tokio::test]
async fn create_post_for_missing_user_is_404() {
    let app = setup().await;
    let response = post_form(&app, "/users/9999/posts/new", "title=t&content=c").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.store.list_posts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_post_missing_content_is_400() {
    let app = setup().await;
    let response = post_form(
        &app,
        &format!("/users/{}/posts/new", app.user_id),
        "title=only",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_post_for_missing_user_with_incomplete_form_is_404() {
    let app = setup().await;
    let response = post_form(&app, "/users/9999/posts/new", "title=a").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_post_with_over_long_title_is_500() {
    let app = setup().await;
    let body = format!("title={}&content=c", "t".repeat(MAX_TITLE_LEN + 1));
    let response = post_form(&app, &format!("/users/{}/posts/new", app.user_id), &body).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.list_posts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn post_detail_shows_title() {
    let app = setup().await;
    let html = page(&app, &format!("/posts/{}", app.post_id)).await;
    assert!(html.contains("<h1>test_title</h1>"));
    assert!(html.contains("test_content"));
}

#[tokio::test]
async fn list_posts_shows_titles() {
    let app = setup().await;
    let html = page(&app, "/posts").await;
    assert!(html.contains("test_title"));
}

#[tokio::test]
async fn edit_post_overwrites_title_and_content() {
    let app = setup().await;
    let form = page(&app, &format!("/posts/{}/edit", app.post_id)).await;
    assert!(form.contains(r#"value="test_title""#));

    let response = post_form(
        &app,
        &format!("/posts/{}/edit", app.post_id),
        "title=fresh&content=new+body",
    )
    .await;
    assert_eq!(location(&response), format!("/posts/{}", app.post_id));

    let html = page(&app, &format!("/posts/{}", app.post_id)).await;
    assert!(html.contains("<h1>fresh</h1>"));
    assert!(html.contains("new body"));
    assert!(!html.contains("test_title"));
}

#[tokio::test]
async fn edit_missing_post_is_404() {
    let app = setup().await;
    assert_eq!(get(&app, "/posts/9999/edit").await.status(), StatusCode::NOT_FOUND);
    let response = post_form(&app, "/posts/9999/edit", "title=t&content=c").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_missing_post_with_incomplete_form_is_404() {
    let app = setup().await;
    let response = post_form(&app, "/posts/9999/edit", "title=a").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_post_redirects_to_owner() {
    let app = setup().await;
    let response = post_form(&app, &format!("/posts/{}/delete", app.post_id), "").await;
    assert_eq!(location(&response), format!("/users/{}", app.user_id));

    let html = page(&app, &format!("/users/{}", app.user_id)).await;
    assert!(html.contains("<h1>test1_first test1_last</h1>"));
    assert!(!html.contains("test_title"));

    let response = get(&app, &format!("/posts/{}", app.post_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_post_is_404() {
    let app = setup().await;
    let response = post_form(&app, "/posts/9999/delete", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

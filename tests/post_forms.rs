//! Create/edit form submission against a mocked backend.

mod fixtures;

use blogpost_client::Route;
use blogpost_client::handlers::post_handlers::{
    CREATE_FAILED, CreatePostForm, EditPostForm, FETCH_FAILED, LOGIN_TO_EDIT, UPDATE_FAILED,
};
use fixtures::{api, post_json};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "author-token-7777";

#[tokio::test]
async fn test_edit_prepopulates_and_puts_changes() {
    let server = MockServer::start().await;
    let mut existing = post_json(7, "alice");
    existing["title"] = json!("Original title");
    existing["content"] = json!("Original body");
    existing["imgUrl"] = json!("https://img.example.com/7.png");

    Mock::given(method("GET"))
        .and(path("/api/posts/7/"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(existing.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/7/"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({
            "title": "Edited title",
            "content": "Original body",
            "imgUrl": "https://img.example.com/7.png"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(existing))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let mut form = EditPostForm::new(7);
    assert!(form.load(&api, Some(TOKEN)).await);
    assert_eq!(form.title, "Original title");
    assert_eq!(form.content, "Original body");
    assert_eq!(form.img_url, "https://img.example.com/7.png");

    form.title = "Edited title".into();
    assert_eq!(form.submit(&api, Some(TOKEN)).await, Some(Route::Home));
    assert!(form.error().is_none());
}

#[tokio::test]
async fn test_edit_sends_null_for_cleared_image() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/3/"))
        .and(body_json(json!({ "title": "T", "content": "C", "imgUrl": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(3, "alice")))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = EditPostForm::new(3);
    form.title = "T".into();
    form.content = "C".into();
    assert_eq!(form.submit(&api(&server), Some(TOKEN)).await, Some(Route::Home));
}

#[tokio::test]
async fn test_edit_fetch_failure_leaves_fields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/9/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })))
        .mount(&server)
        .await;

    let mut form = EditPostForm::new(9);
    assert!(!form.load(&api(&server), Some(TOKEN)).await);
    assert_eq!(form.error(), Some(FETCH_FAILED));
    assert!(form.title.is_empty());
    assert!(form.content.is_empty());
    assert!(form.img_url.is_empty());
}

#[tokio::test]
async fn test_edit_load_requires_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(7, "alice")))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = EditPostForm::new(7);
    assert!(!form.load(&api(&server), None).await);
    assert_eq!(form.error(), Some(LOGIN_TO_EDIT));
}

#[tokio::test]
async fn test_edit_rejected_update_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/7/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut form = EditPostForm::new(7);
    form.title = "T".into();
    form.content = "C".into();
    assert_eq!(form.submit(&api(&server), Some(TOKEN)).await, None);
    assert_eq!(form.error(), Some(UPDATE_FAILED));
}

#[tokio::test]
async fn test_create_posts_and_navigates_home() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({
            "title": "Hello",
            "content": "First post",
            "imgUrl": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(post_json(11, "alice")))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = CreatePostForm::new("Hello", "First post", "");
    assert_eq!(form.submit(&api(&server), Some(TOKEN)).await, Some(Route::Home));
}

#[tokio::test]
async fn test_create_failure_shows_static_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "bad" })))
        .mount(&server)
        .await;

    let mut form = CreatePostForm::new("Hello", "Body", "https://img.example.com/a.png");
    assert_eq!(form.submit(&api(&server), Some(TOKEN)).await, None);
    assert_eq!(form.error(), Some(CREATE_FAILED));
}

#[tokio::test]
async fn test_create_requires_title_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = CreatePostForm::new("", "Body", "");
    assert_eq!(form.submit(&api(&server), Some(TOKEN)).await, None);
    assert_eq!(form.error(), Some("Title is required"));
}

#[tokio::test]
async fn test_successful_update_clears_earlier_load_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(5, "alice")))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let mut form = EditPostForm::new(5);
    assert!(!form.load(&api, Some(TOKEN)).await);
    assert_eq!(form.error(), Some(FETCH_FAILED));

    form.title = "Retyped title".into();
    form.content = "Retyped body".into();
    assert_eq!(form.submit(&api, Some(TOKEN)).await, Some(Route::Home));
    assert!(form.error().is_none());
}

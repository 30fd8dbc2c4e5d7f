//! Shared helpers for integration tests against a wiremock backend.

#![allow(dead_code)]

use blogpost_client::ApiClient;
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

pub fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(reqwest::Client::new(), server.uri())
}

pub fn post_json(id: i64, author: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Post {id}"),
        "content": format!("Content of post {id}"),
        "imgUrl": null,
        "author": { "id": 1, "username": author, "email": format!("{author}@example.com") },
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

pub fn page_json(ids: &[i64], next: Option<&str>) -> Value {
    json!({
        "count": ids.len(),
        "next": next,
        "previous": null,
        "results": ids.iter().map(|id| post_json(*id, "alice")).collect::<Vec<_>>()
    })
}

pub fn page_response(ids: &[i64], next: Option<&str>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(page_json(ids, next))
}

pub fn user_response(username: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": 1,
        "username": username,
        "email": format!("{username}@example.com")
    }))
}

// src/repositories/post_repository.rs - posts CRUD against /api/posts/
use log::{debug, info};
use reqwest::Method;

use crate::client::ApiClient;
use crate::dtos::post_dtos::{Page, PostIn};
use crate::error::ApiError;
use crate::models::post::Post;

/// Calls against `/api/posts/`.
pub struct PostRepository;

impl PostRepository {
    pub async fn list_posts(
        api: &ApiClient,
        page: u32,
        token: Option<&str>,
    ) -> Result<Page<Post>, ApiError> {
        debug!("fetching posts page {} (authenticated: {})", page, token.is_some());

        let req = api
            .request(Method::GET, "/api/posts/", token)
            .query(&[("page", page)]);
        let page: Page<Post> = api.send_json(req).await?;

        debug!("posts page: {} items, next: {:?}", page.results.len(), page.next);
        Ok(page)
    }

    pub async fn get_post(api: &ApiClient, id: i64, token: Option<&str>) -> Result<Post, ApiError> {
        let req = api.request(Method::GET, &format!("/api/posts/{id}/"), token);
        api.send_json(req).await
    }

    pub async fn create_post(
        api: &ApiClient,
        post: &PostIn,
        token: Option<&str>,
    ) -> Result<Post, ApiError> {
        let req = api.request(Method::POST, "/api/posts/", token).json(post);
        let created: Post = api.send_json(req).await?;
        info!("created post {}", created.id);
        Ok(created)
    }

    pub async fn update_post(
        api: &ApiClient,
        id: i64,
        post: &PostIn,
        token: Option<&str>,
    ) -> Result<Post, ApiError> {
        let req = api
            .request(Method::PUT, &format!("/api/posts/{id}/"), token)
            .json(post);
        let updated: Post = api.send_json(req).await?;
        info!("updated post {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_post(api: &ApiClient, id: i64, token: Option<&str>) -> Result<(), ApiError> {
        let req = api.request(Method::DELETE, &format!("/api/posts/{id}/"), token);
        api.send_empty(req).await?;
        info!("deleted post {}", id);
        Ok(())
    }
}

// src/handlers/post_handlers.rs
use std::fmt::Write as _;

use log::error;

use crate::client::ApiClient;
use crate::dtos::post_dtos::PostIn;
use crate::handlers::Route;
use crate::models::feed::Feed;
use crate::models::user::User;
use crate::repositories::post_repository::PostRepository;

pub const CREATE_FAILED: &str = "Failed to create post. Please try again.";
pub const FETCH_FAILED: &str = "Failed to fetch post. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update post. Please try again.";
pub const LOGIN_TO_EDIT: &str = "Please log in to edit posts";

fn required(title: &str, content: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if content.trim().is_empty() {
        return Err("Content is required".to_string());
    }
    Ok(())
}

fn optional_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    (!url.is_empty()).then(|| url.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
    pub img_url: String,
    error: Option<String>,
}

impl CreatePostForm {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        img_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            img_url: img_url.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self, api: &ApiClient, token: Option<&str>) -> Option<Route> {
        self.error = None;
        if let Err(msg) = required(&self.title, &self.content) {
            self.error = Some(msg);
            return None;
        }

        let body = PostIn {
            title: self.title.clone(),
            content: self.content.clone(),
            img_url: optional_url(&self.img_url),
        };
        match PostRepository::create_post(api, &body, token).await {
            Ok(_) => Some(Route::Home),
            Err(e) => {
                error!("Error creating post: {}", e);
                self.error = Some(CREATE_FAILED.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditPostForm {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub img_url: String,
    error: Option<String>,
}

impl EditPostForm {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            img_url: String::new(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pre-populates the fields from the server copy of the post.
    pub async fn load(&mut self, api: &ApiClient, token: Option<&str>) -> bool {
        let Some(token) = token else {
            self.error = Some(LOGIN_TO_EDIT.to_string());
            return false;
        };

        match PostRepository::get_post(api, self.id, Some(token)).await {
            Ok(post) => {
                self.title = post.title;
                self.content = post.content;
                self.img_url = post.img_url.unwrap_or_default();
                self.error = None;
                true
            }
            Err(e) => {
                error!("Error fetching post: {}", e);
                self.error = Some(FETCH_FAILED.to_string());
                false
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient, token: Option<&str>) -> Option<Route> {
        self.error = None;
        if let Err(msg) = required(&self.title, &self.content) {
            self.error = Some(msg);
            return None;
        }

        let body = PostIn {
            title: self.title.clone(),
            content: self.content.clone(),
            img_url: optional_url(&self.img_url),
        };
        match PostRepository::update_post(api, self.id, &body, token).await {
            Ok(_) => Some(Route::Home),
            Err(e) => {
                error!("Error updating post: {}", e);
                self.error = Some(UPDATE_FAILED.to_string());
                None
            }
        }
    }

    pub fn cancel(&self) -> Route {
        Route::Home
    }
}

/// Plain-text rendering of the feed, one card per post.
pub fn render_feed(feed: &Feed, viewer: Option<&User>) -> String {
    let mut out = String::new();

    if let Some(err) = feed.error() {
        let _ = writeln!(out, "! {err}\n");
    }

    for post in feed.posts() {
        let _ = writeln!(out, "#{} {}", post.id, post.title);
        let _ = writeln!(
            out,
            "   [{}] {} · {}",
            post.author_initial(),
            post.author.username,
            post.display_date()
        );
        if let Some(img) = post.image() {
            let _ = writeln!(out, "   image: {img}");
        }
        let _ = writeln!(out, "   {}", post.excerpt());
        if post.is_owned_by(viewer) {
            let _ = writeln!(out, "   (edit: {}, delete: #{})", Route::EditPost(post.id), post.id);
        }
        out.push('\n');
    }

    if feed.is_loading() {
        out.push_str("Loading more posts...\n");
    } else if !feed.has_more() {
        if feed.posts().is_empty() {
            out.push_str("No posts available\n");
        } else {
            out.push_str("No more posts to load\n");
        }
    }
    out
}

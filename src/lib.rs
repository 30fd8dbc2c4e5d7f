pub mod client;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, FeedError};
pub use handlers::Route;
pub use services::feed_paginator::{FeedPaginator, LoadOutcome};
pub use services::session_manager::SessionManager;
pub use services::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Shortens a secret for log output.
pub fn mask_token(k: &str) -> String {
    if k.len() <= 8 {
        return "[REDACTED]".to_string();
    }
    match (k.get(..4), k.get(k.len() - 4..)) {
        (Some(head), Some(tail)) => format!("{head}***{tail}"),
        _ => "[REDACTED]".to_string(),
    }
}

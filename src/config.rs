// src/config.rs
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Runtime settings, read from the environment (and `.env` via dotenv).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("BLOG_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            anyhow::bail!("BLOG_API_URL must be an http(s) URL, got {api_url:?}");
        }

        let data_dir = match env::var("BLOG_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
            _ => default_data_dir()
                .context("could not determine home directory, set BLOG_DATA_DIR")?,
        };

        let user_agent = env::var("BLOG_USER_AGENT")
            .unwrap_or_else(|_| concat!("blogpost-client/", env!("CARGO_PKG_VERSION")).to_string());

        Ok(Self {
            api_url,
            data_dir,
            user_agent,
        })
    }

    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .build()
            .context("failed to build http client")
    }
}

/// `~/.blogpost`, wherever the platform puts the home directory.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".blogpost"))
}

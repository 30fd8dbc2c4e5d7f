use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::middleware::auth::BearerExt;

/// Shared transport: one `reqwest::Client` plus the API base URL.
///
/// Holds no credentials. Callers pass the bearer token per request.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self::new(cfg.http_client()?, cfg.api_url.clone()))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        self.http.request(method, self.url(path)).bearer_opt(token)
    }

    /// Sends the request and decodes a JSON body from a 2xx response.
    pub async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send_checked(req).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends the request and discards the body of a 2xx response.
    pub async fn send_empty(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.send_checked(req).await.map(|_| ())
    }

    async fn send_checked(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let url = resp.url().path().to_string();
        let text = resp.text().await.unwrap_or_default();

        debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(ApiError::Status { status, body: text });
        }
        Ok(text)
    }
}

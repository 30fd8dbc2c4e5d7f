// src/services/auth_services.rs
use log::{debug, info};
use reqwest::Method;

use crate::client::ApiClient;
use crate::dtos::auth::{Credentials, RegisterIn, TokenOut};
use crate::error::ApiError;
use crate::models::user::User;

/// Token, registration and identity endpoints.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenOut, ApiError> {
        debug!("requesting token for {}", credentials.username.trim());
        let req = self
            .api
            .request(Method::POST, "/api/token/", None)
            .json(credentials);
        self.api.send_json(req).await
    }

    /// Any 2xx counts as success; the response body is not needed.
    pub async fn register(&self, input: &RegisterIn) -> Result<(), ApiError> {
        let req = self
            .api
            .request(Method::POST, "/api/register/", None)
            .json(input);
        self.api.send_empty(req).await?;
        info!("registered {}", input.username);
        Ok(())
    }

    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let req = self.api.request(Method::GET, "/api/user/", Some(token));
        self.api.send_json(req).await
    }
}

//! Per-request authorization and read-only token inspection.
//!
//! Requests never inherit a default `Authorization` header: every call site
//! passes the token it wants attached (or `None`).

use base64::Engine;
use chrono::{DateTime, Utc};
use reqwest::RequestBuilder;
use serde::Deserialize;

pub trait BearerExt {
    /// Attaches `Authorization: Bearer <token>` when a token is given.
    fn bearer_opt(self, token: Option<&str>) -> Self;
}

impl BearerExt for RequestBuilder {
    fn bearer_opt(self, token: Option<&str>) -> Self {
        match token {
            Some(t) => self.bearer_auth(t),
            None => self,
        }
    }
}

/// Claims from the access token payload. The signature is NOT checked; this is
/// for display only and never used to decide whether a session is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub user_id: Option<i64>,
    pub exp: Option<i64>,
    pub token_type: Option<String>,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }
}

/// Decodes the payload segment of a JWT, or `None` if it is not one.
pub fn token_claims(token: &str) -> Option<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    // JWT uses base64url without padding; some issuers pad anyway.
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .or_else(|_| base64::engine::general_purpose::URL_SAFE.decode(parts[1]))
        .ok()?;

    match serde_json::from_slice(&decoded) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::debug!("token payload is not json: {}", e);
            None
        }
    }
}

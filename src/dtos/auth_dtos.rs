use serde::{Deserialize, Serialize};

/// Body of `POST /api/token/`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/register/`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterIn {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenOut {
    pub access: String,
    pub refresh: Option<String>,
}

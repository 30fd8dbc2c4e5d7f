use serde::{Deserialize, Serialize};

/// Identity record returned by `GET /api/user/` and embedded as a post author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

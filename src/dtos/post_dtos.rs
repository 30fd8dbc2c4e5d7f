use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts/` and `PUT /api/posts/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostIn {
    pub title: String,
    pub content: String,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
}

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

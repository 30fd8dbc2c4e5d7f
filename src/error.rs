use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }
}

/// Failures surfaced by the feed. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Please log in to view posts")]
    LoginToView,
    #[error("Failed to fetch posts. Please try again.")]
    FetchFailed,
    #[error("Please log in to delete posts")]
    LoginToDelete,
    #[error("You are not authorized to delete this post")]
    NotAuthorizedToDelete,
    #[error("Failed to delete post. Please try again.")]
    DeleteFailed,
    #[error("Please log in to edit posts")]
    LoginToEdit,
}

impl FeedError {
    pub fn from_load(err: &ApiError) -> Self {
        if err.is_unauthorized() {
            FeedError::LoginToView
        } else {
            FeedError::FetchFailed
        }
    }

    pub fn from_delete(err: &ApiError) -> Self {
        if err.is_unauthorized() {
            FeedError::LoginToDelete
        } else if err.is_forbidden() {
            FeedError::NotAuthorizedToDelete
        } else {
            FeedError::DeleteFailed
        }
    }
}

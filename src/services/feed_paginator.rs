use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, info};

use crate::client::ApiClient;
use crate::error::FeedError;
use crate::handlers::Route;
use crate::models::feed::Feed;
use crate::repositories::post_repository::PostRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { received: usize },
    /// Nothing requested: a load was in flight or there are no more pages.
    Skipped,
    /// The response arrived after `set_token` and was dropped.
    Superseded,
    Failed(FeedError),
}

/// Drives a [`Feed`] against `/api/posts/`.
///
/// Methods take `&self` so a continuation can be triggered while another is
/// pending; the feed lock is never held across a request.
pub struct FeedPaginator {
    api: ApiClient,
    feed: Mutex<Feed>,
}

impl FeedPaginator {
    pub fn new(api: ApiClient, token: Option<String>) -> Self {
        Self {
            api,
            feed: Mutex::new(Feed::new(token)),
        }
    }

    fn feed(&self) -> MutexGuard<'_, Feed> {
        self.feed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Feed {
        self.feed().clone()
    }

    pub fn dismiss_error(&self) {
        self.feed().dismiss_error();
    }

    /// Starts a fresh feed for `token` and loads its first page.
    pub async fn set_token(&self, token: Option<String>) -> LoadOutcome {
        self.feed().reset(token);
        self.load_initial().await
    }

    pub async fn load_initial(&self) -> LoadOutcome {
        let req = self.feed().begin_initial();

        match PostRepository::list_posts(&self.api, req.page, req.token.as_deref()).await {
            Ok(page) => {
                let received = page.results.len();
                if !self.feed().finish_initial(&req, page) {
                    return superseded(req.page);
                }
                LoadOutcome::Loaded { received }
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                let err = FeedError::from_load(&e);
                if !self.feed().fail_load(&req, err.clone()) {
                    return superseded(req.page);
                }
                LoadOutcome::Failed(err)
            }
        }
    }

    pub async fn load_more(&self) -> LoadOutcome {
        let Some(req) = self.feed().begin_more() else {
            return LoadOutcome::Skipped;
        };

        match PostRepository::list_posts(&self.api, req.page, req.token.as_deref()).await {
            Ok(page) => {
                let received = page.results.len();
                if !self.feed().finish_more(&req, page) {
                    return superseded(req.page);
                }
                LoadOutcome::Loaded { received }
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                let err = FeedError::from_load(&e);
                if !self.feed().fail_load(&req, err.clone()) {
                    return superseded(req.page);
                }
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Deletes on the server, then drops the post locally. No re-fetch.
    pub async fn delete(&self, post_id: i64) -> Result<(), FeedError> {
        let token = self.feed().token().map(str::to_owned);
        let Some(token) = token else {
            self.feed().set_error(FeedError::LoginToDelete);
            return Err(FeedError::LoginToDelete);
        };

        match PostRepository::delete_post(&self.api, post_id, Some(&token)).await {
            Ok(()) => {
                if !self.feed().remove(post_id) {
                    info!("deleted post {} was not in the feed", post_id);
                }
                Ok(())
            }
            Err(e) => {
                error!("Error deleting post: {}", e);
                let err = FeedError::from_delete(&e);
                self.feed().set_error(err.clone());
                Err(err)
            }
        }
    }

    pub fn edit_route(&self, post_id: i64) -> Result<Route, FeedError> {
        let mut feed = self.feed();
        if feed.token().is_none() {
            feed.set_error(FeedError::LoginToEdit);
            return Err(FeedError::LoginToEdit);
        }
        Ok(Route::EditPost(post_id))
    }
}

fn superseded(page: u32) -> LoadOutcome {
    debug!("dropping page {} response from before the token changed", page);
    LoadOutcome::Superseded
}

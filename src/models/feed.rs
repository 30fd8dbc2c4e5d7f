//! In-memory feed with page-cursor bookkeeping.
//!
//! Transitions are synchronous; `services::feed_paginator` performs the
//! requests between `begin_*` and `finish_*`.

use crate::dtos::post_dtos::Page;
use crate::error::FeedError;
use crate::models::post::Post;

/// What a continuation should fetch, handed out by `Feed::begin_more`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub token: Option<String>,
    /// Feed generation the request belongs to; see `Feed::reset`.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    posts: Vec<Post>,
    next_page: u32,
    has_more: bool,
    in_flight: bool,
    token: Option<String>,
    error: Option<FeedError>,
    generation: u64,
}

impl Feed {
    pub fn new(token: Option<String>) -> Self {
        Self {
            posts: Vec::new(),
            next_page: 1,
            has_more: true,
            in_flight: false,
            token,
            error: None,
            generation: 0,
        }
    }

    /// Starts over for `token`. Responses to requests issued before the reset
    /// are dropped by the `finish_*`/`fail_load` transitions.
    pub fn reset(&mut self, token: Option<String>) {
        let generation = self.generation + 1;
        *self = Feed {
            generation,
            ..Feed::new(token)
        };
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    /// Starts the page-1 load. Always allowed.
    pub fn begin_initial(&mut self) -> PageRequest {
        self.in_flight = true;
        PageRequest {
            page: 1,
            token: self.token.clone(),
            generation: self.generation,
        }
    }

    /// Starts a continuation, or returns `None` when one is already running
    /// or the server reported no further pages.
    pub fn begin_more(&mut self) -> Option<PageRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        self.in_flight = true;
        Some(PageRequest {
            page: self.next_page,
            token: self.token.clone(),
            generation: self.generation,
        })
    }

    fn is_current(&self, req: &PageRequest) -> bool {
        req.generation == self.generation
    }

    /// Applies page 1. Returns false (and changes nothing) for a stale request.
    pub fn finish_initial(&mut self, req: &PageRequest, page: Page<Post>) -> bool {
        if !self.is_current(req) {
            return false;
        }
        self.has_more = page.has_next();
        self.posts = page.results;
        self.next_page = 2;
        self.in_flight = false;
        self.error = None;
        true
    }

    pub fn finish_more(&mut self, req: &PageRequest, page: Page<Post>) -> bool {
        if !self.is_current(req) {
            return false;
        }
        self.has_more = page.has_next();
        self.posts.extend(page.results);
        self.next_page += 1;
        self.in_flight = false;
        self.error = None;
        true
    }

    pub fn fail_load(&mut self, req: &PageRequest, err: FeedError) -> bool {
        if !self.is_current(req) {
            return false;
        }
        self.in_flight = false;
        self.error = Some(err);
        true
    }

    /// Removes the post with `id`. Returns whether one was found.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.posts.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.posts.remove(idx);
                self.error = None;
                true
            }
            None => false,
        }
    }

    pub fn set_error(&mut self, err: FeedError) {
        self.error = Some(err);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

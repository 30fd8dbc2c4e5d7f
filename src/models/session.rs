//! Authentication session state and its transitions.
//!
//! `Session` is plain data; the IO that drives it lives in
//! `services::session_manager`.

use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Persisted token not yet checked against `/api/user/`.
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    status: SessionStatus,
}

impl Session {
    /// A session rehydrated from whatever token was persisted.
    pub fn restored(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            user: None,
            status: SessionStatus::Loading,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// A fresh token replaces any previous identity until it is validated.
    pub fn token_issued(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
    }

    /// Records the identity for the current token. Ignored without a token.
    pub fn identity_loaded(&mut self, user: User) -> bool {
        if self.token.is_none() {
            return false;
        }
        self.user = Some(user);
        true
    }

    /// Identity fetch failed. Only a rejected token ends the session.
    pub fn identity_failed(&mut self, unauthorized: bool) {
        self.user = None;
        if unauthorized {
            self.token = None;
        }
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn mark_ready(&mut self) {
        self.status = SessionStatus::Ready;
    }
}

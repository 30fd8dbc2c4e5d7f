use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::dtos::auth::{Credentials, RegisterIn};
use crate::mask_token;
use crate::middleware::auth::{TokenClaims, token_claims};
use crate::models::session::{Session, SessionStatus};
use crate::models::user::User;
use crate::services::auth_services::AuthService;
use crate::services::token_store::TokenStore;

/// Owns the session token and identity. Passed explicitly to whatever needs
/// them; there is no global instance.
pub struct SessionManager {
    auth: AuthService,
    store: Arc<dyn TokenStore>,
    session: Session,
}

impl SessionManager {
    /// Rehydrates from the persisted token. Call `bootstrap` before use.
    pub fn new(auth: AuthService, store: Arc<dyn TokenStore>) -> Self {
        let token = match store.load() {
            Ok(t) => t,
            Err(e) => {
                warn!("could not read persisted token: {}", e);
                None
            }
        };
        Self {
            auth,
            store,
            session: Session::restored(token),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token_claims(&self) -> Option<TokenClaims> {
        self.session.token().and_then(token_claims)
    }

    /// Validates a persisted token by fetching the identity it belongs to.
    pub async fn bootstrap(&mut self) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            self.session.mark_ready();
            return;
        };

        if let Some(exp) = token_claims(&token).and_then(|c| c.expires_at()) {
            debug!("persisted token {} expires at {}", mask_token(&token), exp);
        }

        match self.auth.current_user(&token).await {
            Ok(user) => {
                info!("session restored for {}", user.username);
                self.session.identity_loaded(user);
            }
            Err(e) => {
                error!("Auth error: {}", e);
                let unauthorized = e.is_unauthorized();
                if unauthorized {
                    self.forget_persisted();
                }
                self.session.identity_failed(unauthorized);
            }
        }
        self.session.mark_ready();
    }

    /// Exchanges credentials for a token and loads the identity.
    pub async fn login(&mut self, credentials: &Credentials) -> bool {
        let token = match self.auth.obtain_token(credentials).await {
            Ok(out) => out.access,
            Err(e) => {
                error!("Login error: {}", e);
                return false;
            }
        };

        if let Err(e) = self.store.save(&token) {
            error!("Login error: could not persist token: {}", e);
            return false;
        }
        self.session.token_issued(token.clone());

        match self.auth.current_user(&token).await {
            Ok(user) => {
                info!("logged in as {} ({})", user.username, mask_token(&token));
                self.session.identity_loaded(user);
                self.session.mark_ready();
                true
            }
            Err(e) => {
                error!("Login error: identity fetch failed: {}", e);
                self.logout();
                false
            }
        }
    }

    /// Creates an account. Does not log in.
    pub async fn register(&self, input: &RegisterIn) -> bool {
        match self.auth.register(input).await {
            Ok(()) => true,
            Err(e) => {
                error!("Registration error: {}", e);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.forget_persisted();
        self.session.clear();
        info!("logged out");
    }

    fn forget_persisted(&self) {
        if let Err(e) = self.store.clear() {
            warn!("could not remove persisted token: {}", e);
        }
    }
}

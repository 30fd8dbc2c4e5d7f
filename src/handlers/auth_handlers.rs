use crate::dtos::auth::{Credentials, RegisterIn};
use crate::handlers::Route;
use crate::models::session::Session;
use crate::services::session_manager::SessionManager;

pub const LOGIN_FAILED: &str = "Invalid username or password";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self, session: &mut SessionManager) -> Option<Route> {
        self.error = None;
        let credentials = Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        };
        if session.login(&credentials).await {
            Some(Route::Home)
        } else {
            self.error = Some(LOGIN_FAILED.to_string());
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// On success the user is sent to log in; registering never logs in.
    pub async fn submit(&mut self, session: &SessionManager) -> Option<Route> {
        self.error = None;
        let input = RegisterIn {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        if session.register(&input).await {
            Some(Route::Login)
        } else {
            self.error = Some(REGISTER_FAILED.to_string());
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Login,
    Register,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub username: Option<String>,
    pub items: Vec<NavItem>,
}

impl NavBar {
    pub fn for_session(session: &Session) -> Self {
        match session.user() {
            Some(user) => Self {
                username: Some(user.username.clone()),
                items: vec![NavItem::Logout],
            },
            None => Self {
                username: None,
                items: vec![NavItem::Login, NavItem::Register],
            },
        }
    }

    pub fn logout(session: &mut SessionManager) -> Route {
        session.logout();
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    #[test]
    fn nav_bar_follows_identity() {
        let mut session = Session::restored(Some("tok".into()));
        assert_eq!(
            NavBar::for_session(&session).items,
            vec![NavItem::Login, NavItem::Register]
        );

        session.identity_loaded(User {
            id: Some(1),
            username: "alice".into(),
            email: None,
        });
        let nav = NavBar::for_session(&session);
        assert_eq!(nav.username.as_deref(), Some("alice"));
        assert_eq!(nav.items, vec![NavItem::Logout]);
    }
}

//! View-level actions: forms, the nav bar and feed rendering.

pub mod auth_handlers;
pub mod post_handlers;

use std::fmt;

/// Where a view sends the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    CreatePost,
    EditPost(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::CreatePost => "/create-post".to_string(),
            Route::EditPost(id) => format!("/edit-post/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

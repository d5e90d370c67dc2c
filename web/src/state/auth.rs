//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a `RwSignal` context by `App`; written by the login page and
//! the navbar logout button, read by the homepage route guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use model::Session;

/// Authentication state: the stored session, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

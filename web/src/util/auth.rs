//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that need a session apply identical redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use model::Route;

use crate::state::auth::AuthState;

/// Whether `route` should send the user to the login page.
#[must_use]
pub fn should_redirect_unauth(route: Route, state: &AuthState) -> bool {
    route.requires_session() && !state.is_logged_in()
}

/// Redirect to `/login` whenever `route` needs a session and none is present.
pub fn install_unauth_redirect<F>(route: Route, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(route, &auth.get()) {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
    });
}

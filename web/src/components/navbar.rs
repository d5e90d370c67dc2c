//! Top bar with the logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use model::Route;

use crate::state::auth::AuthState;
use crate::util::storage;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        storage::clear_session();
        auth.update(|a| a.session = None);
        navigate(Route::Login.path(), NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__title">"Course Points"</span>
            <span class="navbar__spacer"></span>
            <button class="btn btn--danger" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}

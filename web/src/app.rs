//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::util::storage;

/// Root application component.
///
/// Seeds the auth context from `localStorage` and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { session: storage::load_session() });
    provide_context(auth);

    view! {
        <Title text="Course Points"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("homepage") view=HomePage/>
            </Routes>
        </Router>
    }
}

//! Login page: email + password against `POST /api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use model::input::{LOGIN_FAILED, validate_login};
use model::{Failure, Route, Session};

use crate::state::auth::AuthState;
use crate::util::storage;

fn login_button_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Log In" }
}

fn login_failure_message(failure: Failure) -> String {
    failure.message_or(LOGIN_FAILED)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(resp) => {
                    let session = Session::new(resp.token, request.email);
                    storage::save_session(&session);
                    auth.update(|a| a.session = Some(session));
                    navigate(Route::Home.path(), NavigateOptions::default());
                }
                Err(failure) => info.set(login_failure_message(failure)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Log In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        {move || login_button_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "No account? "
                    <a href=Route::Signup.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

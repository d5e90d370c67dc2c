//! Signup page: name, email and password against `POST /api/signup`.
//!
//! On success the user is sent to `/login` to sign in with the new account.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use model::Route;
use model::input::{SIGNUP_FAILED, validate_signup};

fn signup_button_label(busy: bool) -> &'static str {
    if busy { "Signing up..." } else { "Sign Up" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup(&name.get(), &email.get(), &password.get()) {
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
            match crate::net::api::signup(&request).await {
                Ok(_) => navigate(Route::Login.path(), NavigateOptions::default()),
                Err(failure) => info.set(failure.message_or(SIGNUP_FAILED)),
            }
            busy.set(false);
        });
    };

    let field = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field(name, "text", "Name")}
                    {field(email, "email", "you@example.com")}
                    {field(password, "password", "Password")}
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        {move || signup_button_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <a href=Route::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}

//! Homepage: point balance, referral code actions and the course catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a session; without one the route guard sends the user to
//! `/login`. On mount the page fetches points and then courses, folding each
//! outcome into a `HomeState` signal. Referral actions use the same state
//! transitions as the CLI and run their requests with `spawn_local`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use model::home::{LOADING_LABEL, LoadStep, NO_COURSES_LABEL};
use model::{CourseId, HomeState, Route};

use crate::components::course_card::CourseCard;
use crate::components::navbar::Navbar;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

fn generate_button_label(generating: bool) -> &'static str {
    if generating { "Generating..." } else { "Generate Referral Code" }
}

fn verify_button_label(verifying: bool) -> &'static str {
    if verifying { "Verifying..." } else { "Verify Referral Code" }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(Route::Home, auth, use_navigate());

    let state = RwSignal::new(HomeState::default());

    if let Some(token) = auth.get_untracked().token() {
        leptos::task::spawn_local(async move {
            let points = api::fetch_points(&token).await;
            if state.try_update(|s| s.apply_points(points)) == Some(LoadStep::Continue) {
                let courses = api::fetch_courses(&token).await;
                state.update(|s| s.apply_courses(courses));
            }
        });
    }

    let on_generate = Callback::new(move |course_id: Option<CourseId>| {
        let session = auth.get_untracked().session;
        let Some(request) = state
            .try_update(|s| s.begin_generate(session.as_ref(), course_id))
            .flatten()
        else {
            return;
        };
        let Some(token) = session.map(|s| s.token) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::create_referral_code(&token, &request).await;
            state.update(|s| s.finish_generate(result));
        });
    });

    let on_verify = Callback::new(move |()| {
        let session = auth.get_untracked().session;
        let Some(request) = state.try_update(|s| s.begin_verify(session.as_ref())).flatten() else {
            return;
        };
        let Some(token) = session.map(|s| s.token) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::verify_referral_code(&token, &request).await;
            state.update(|s| s.finish_verify(result));
        });
    });

    let loading = move || state.with(|s| s.loading);
    let generating = Signal::derive(move || state.with(|s| s.generating));
    let verifying = move || state.with(|s| s.verifying);
    let error = move || state.with(|s| s.error.clone());
    let courses = Memo::new(move |_| state.with(|s| s.courses.clone()));

    view! {
        <Show when=move || !loading() fallback=|| view! { <p class="home__loading">{LOADING_LABEL}</p> }>
            <Navbar/>
            <div class="home">
                <h1 class="home__title">"Available Courses"</h1>

                <Show when=move || error().is_some()>
                    <p class="home__error">{move || error().unwrap_or_default()}</p>
                </Show>

                <section class="home__section">
                    <h2>"Your Points: " {move || state.with(HomeState::points_label)}</h2>
                </section>

                <section class="home__section">
                    <h2>"Your Referral Code:"</h2>
                    <p class="home__code">{move || state.with(|s| s.code_label().to_owned())}</p>
                    <button
                        class="btn"
                        disabled=move || generating.get()
                        on:click=move |_| on_generate.run(None)
                    >
                        {move || generate_button_label(generating.get())}
                    </button>
                </section>

                <section class="home__section">
                    <h2>"Verify Referral Code:"</h2>
                    <input
                        class="home__input"
                        type="text"
                        placeholder="Enter referral code"
                        prop:value=move || state.with(|s| s.referral_input.clone())
                        on:input=move |ev| state.update(|s| s.referral_input = event_target_value(&ev))
                    />
                    <button class="btn" disabled=verifying on:click=move |_| on_verify.run(())>
                        {move || verify_button_label(verifying())}
                    </button>
                </section>

                <div class="home__grid">
                    {move || {
                        let courses = courses.get();
                        if courses.is_empty() {
                            view! { <p class="home__empty">{NO_COURSES_LABEL}</p> }.into_any()
                        } else {
                            courses
                                .into_iter()
                                .map(|course| {
                                    view! { <CourseCard course=course on_generate=on_generate disabled=generating/> }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

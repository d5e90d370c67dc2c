//! # web
//!
//! Leptos single-page client for the course referral product: login,
//! signup, and a homepage listing courses with the user's point balance and
//! referral-code actions.
//!
//! Browser-only code (HTTP via `gloo-net`, `localStorage`, logging) sits
//! behind the `csr` feature; without it the crate builds natively so page
//! helpers can be unit-tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or_default();
    leptos::mount::mount_to_body(app::App);
}

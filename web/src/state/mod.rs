//! Shared client-side state modules.
//!
//! The homepage view state lives in `model::HomeState`; only the session
//! context is specific to the browser.

pub mod auth;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and catalog entries, reading the auth
//! session from the Leptos context provided by `App`.

pub mod course_card;
pub mod navbar;

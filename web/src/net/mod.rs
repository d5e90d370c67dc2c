//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the course backend; wire types come from the
//! shared `model` crate.

pub mod api;

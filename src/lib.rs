//! # coursepoints
//!
//! Native client for the course referral API: log in, list purchasable
//! courses with the current point balance, and generate or redeem referral
//! codes. View state and wire types come from the shared `model` crate; this
//! crate adds the `reqwest` transport and file-backed session storage.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod home;
pub mod render;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use home::{HomeEntry, HomePage};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};

//! Shared course/referral model for the native and browser clients.
//!
//! This crate owns the wire representation of the course API, the route
//! table, form validation, and the homepage view state. It performs no I/O:
//! both `coursepoints` (reqwest) and `web` (gloo-net) feed request outcomes
//! into [`HomeState`] and render whatever it holds.

pub mod home;
pub mod input;
pub mod route;
pub mod session;
pub mod wire;

pub use home::{Failure, HomeState};
pub use route::Route;
pub use session::Session;
pub use wire::{Course, CourseId};

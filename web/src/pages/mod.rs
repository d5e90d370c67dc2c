//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. View transitions live in `model` so the CLI shares them.

pub mod home;
pub mod login;
pub mod signup;

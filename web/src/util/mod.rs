//! Browser helpers shared by pages.

pub mod auth;
pub mod storage;

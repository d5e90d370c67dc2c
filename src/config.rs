//! Client configuration: API origin, timeouts and where the session lives.
//!
//! Values come from CLI flags, which fall back to `COURSEPOINTS_*`
//! environment variables (optionally loaded from `.env`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::error::{ClientError, Result};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Timeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the course API without a trailing slash.
    pub api_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(model::wire::DEFAULT_API_ORIGIN, Timeouts::default())
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_url: &str, timeouts: Timeouts) -> Self {
        Self { api_url: normalize_api_url(api_url), timeouts }
    }
}

fn normalize_api_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Resolve the session file: an explicit path wins, else the platform data
/// directory (e.g. `~/.local/share/coursepoints/session.json`).
///
/// # Errors
///
/// Returns [`ClientError::NoDataDir`] when no explicit path is given and the
/// platform has no home directory.
pub fn session_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let dirs = ProjectDirs::from("", "", "coursepoints").ok_or(ClientError::NoDataDir)?;
    Ok(dirs.data_dir().join(SESSION_FILE_NAME))
}

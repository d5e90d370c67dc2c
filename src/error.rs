//! Error type for the native client.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use model::Failure;

/// Everything that can go wrong between the CLI and the course API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No stored session; the user has to log in first.
    #[error("not logged in; run `coursepoints login` first")]
    NotLoggedIn,
    /// Form input failed the local emptiness checks.
    #[error("{0}")]
    InvalidInput(&'static str),
    /// The backend answered with a non-2xx status.
    #[error("server returned HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    /// The HTTP request failed or its body could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing the session file failed.
    #[error("session storage failed: {0}")]
    Io(#[from] std::io::Error),
    /// No platform data directory to keep the session in.
    #[error("could not determine a data directory; pass --session-file")]
    NoDataDir,
}

impl ClientError {
    /// Collapse into the classification the view state understands.
    #[must_use]
    pub fn failure(&self) -> Failure {
        match self {
            Self::Rejected { message, .. } => Failure::Rejected { message: message.clone() },
            _ => Failure::Transport,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

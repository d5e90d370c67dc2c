//! Persisted login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps these two values under separate `localStorage` keys; the
//! native client serializes the whole struct to a JSON file.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// `localStorage` key holding the signed-in user's email.
pub const EMAIL_KEY: &str = "userEmail";

/// Token issued at login plus the identity used for referrals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self { token: token.into(), email: Some(email.into()) }
    }

    /// Rebuild a session from raw stored values. A blank token is no session.
    #[must_use]
    pub fn from_stored(token: Option<String>, email: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        let email = email.filter(|e| !e.trim().is_empty());
        Some(Self { token, email })
    }

    /// Token and email together, as the referral endpoints require.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref()?;
        Some((self.token.as_str(), email))
    }
}

//! Session persistence in `localStorage`.
//!
//! The token and the user's email are kept under the `token` and `userEmail`
//! keys. Storage errors (private mode, quota) degrade to "logged out" rather
//! than failing the page. Requires a browser environment.

#[cfg(feature = "csr")]
use model::session::{EMAIL_KEY, TOKEN_KEY};
use model::Session;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored session. `None` when no token is stored.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let email = storage.get_item(EMAIL_KEY).ok().flatten();
        Session::from_stored(token, email)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist a freshly issued session.
pub fn save_session(session: &Session) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, &session.token).is_err() {
            log::warn!("failed to store session token");
        }
        if let Some(email) = &session.email {
            if storage.set_item(EMAIL_KEY, email).is_err() {
                log::warn!("failed to store user email");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

/// Remove the stored token and email.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}

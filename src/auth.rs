//! Login, signup and logout.

use model::{Route, Session, input};

use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::session::SessionStore;

/// Exchange credentials for a token and store it with the email.
///
/// # Errors
///
/// Returns [`ClientError::InvalidInput`] for blank fields, the API error when
/// the backend refuses, or a storage error.
pub async fn login(
    api: &ApiClient,
    store: &impl SessionStore,
    email: &str,
    password: &str,
) -> Result<Session> {
    let body = input::validate_login(email, password).map_err(ClientError::InvalidInput)?;
    let response = api.login(&body).await?;
    let session = Session::new(response.token, body.email);
    store.save(&session)?;
    tracing::info!(email = ?session.email, "logged in");
    Ok(session)
}

/// Register a new account. The user logs in afterwards.
///
/// # Errors
///
/// Returns [`ClientError::InvalidInput`] for blank fields or the API error.
pub async fn signup(api: &ApiClient, name: &str, email: &str, password: &str) -> Result<Option<String>> {
    let body = input::validate_signup(name, email, password).map_err(ClientError::InvalidInput)?;
    let response = api.signup(&body).await?;
    tracing::info!(email = %body.email, "signed up");
    Ok(response.message)
}

/// Clear the stored session; the caller continues at the returned route.
///
/// # Errors
///
/// Returns a storage error if the session cannot be removed.
pub fn logout(store: &impl SessionStore) -> Result<Route> {
    store.clear()?;
    tracing::info!("logged out");
    Ok(Route::Login)
}

//! REST API helpers for communicating with the course backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net` with a bearer token.
//! Native builds: stubs returning [`Failure::Transport`], since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, Failure>` instead of panics: non-2xx responses
//! become [`Failure::Rejected`] with the backend's `message`, network and
//! decode errors become [`Failure::Transport`]. The homepage state turns
//! either into the single on-screen error line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::Failure;
use model::wire::{
    self, Course, CreateReferralRequest, LoginRequest, LoginResponse, SignupRequest,
    SignupResponse, VerifyReferralRequest,
};
#[cfg(feature = "csr")]
use model::wire::{CreateReferralResponse, PointsResponse, VerifyReferralResponse};
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

/// API origin, overridable at build time with `COURSEPOINTS_API_URL`.
#[must_use]
pub fn api_origin() -> &'static str {
    option_env!("COURSEPOINTS_API_URL").unwrap_or(wire::DEFAULT_API_ORIGIN)
}

#[cfg(any(test, feature = "csr"))]
fn api_url(path: &str) -> String {
    wire::endpoint(api_origin(), path)
}

#[cfg(feature = "csr")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, Failure> {
    let text = resp.text().await.map_err(|e| {
        log::error!("failed to read response body: {e}");
        Failure::Transport
    })?;
    if !resp.ok() {
        log::warn!("{} rejected with status {}", resp.url(), resp.status());
        return Err(Failure::Rejected { message: wire::rejection_message(&text) });
    }
    serde_json::from_str(&text).map_err(|e| {
        log::error!("failed to decode response from {}: {e}", resp.url());
        Failure::Transport
    })
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> Failure {
    log::error!("request failed: {e}");
    Failure::Transport
}

/// `POST /api/login`.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend refuses it.
pub async fn login(body: &LoginRequest) -> Result<LoginResponse, Failure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url(wire::LOGIN_PATH))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(Failure::Transport)
    }
}

/// `POST /api/signup`. An empty success body is accepted.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend refuses it.
pub async fn signup(body: &SignupRequest) -> Result<SignupResponse, Failure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url(wire::SIGNUP_PATH))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let text = resp.text().await.map_err(transport)?;
        if !resp.ok() {
            return Err(Failure::Rejected { message: wire::rejection_message(&text) });
        }
        if text.trim().is_empty() {
            return Ok(SignupResponse::default());
        }
        serde_json::from_str(&text).map_err(|_| Failure::Transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(Failure::Transport)
    }
}

/// `GET /api/user/points`.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend refuses it.
pub async fn fetch_points(token: &str) -> Result<i64, Failure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url(wire::POINTS_PATH))
            .header("Authorization", &wire::bearer(token))
            .send()
            .await
            .map_err(transport)?;
        let body: PointsResponse = read_json(resp).await?;
        Ok(body.points)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(Failure::Transport)
    }
}

/// `GET /api/courses`.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend refuses it.
pub async fn fetch_courses(token: &str) -> Result<Vec<Course>, Failure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url(wire::COURSES_PATH))
            .header("Authorization", &wire::bearer(token))
            .send()
            .await
            .map_err(transport)?;
        let courses: Vec<Course> = read_json(resp).await?;
        log::debug!("fetched {} courses", courses.len());
        Ok(courses)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(Failure::Transport)
    }
}

/// `POST /api/createReferralCode`; returns the generated code.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend refuses it.
pub async fn create_referral_code(token: &str, body: &CreateReferralRequest) -> Result<String, Failure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url(wire::CREATE_REFERRAL_PATH))
            .header("Authorization", &wire::bearer(token))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let created: CreateReferralResponse = read_json(resp).await?;
        Ok(created.referral_code)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, body);
        Err(Failure::Transport)
    }
}

/// `POST /api/verifyReferralCode`; returns the updated point balance.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend refuses it.
pub async fn verify_referral_code(token: &str, body: &VerifyReferralRequest) -> Result<i64, Failure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url(wire::VERIFY_REFERRAL_PATH))
            .header("Authorization", &wire::bearer(token))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let verified: VerifyReferralResponse = read_json(resp).await?;
        Ok(verified.points)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, body);
        Err(Failure::Transport)
    }
}

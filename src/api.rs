//! HTTP client for the course API.
//!
//! Thin wrapper over `reqwest`: one method per endpoint, bearer auth on every
//! authenticated call, and a single response path that turns non-2xx
//! statuses into [`ClientError::Rejected`] carrying the backend's `message`.
//! No retries and no caching; each call is one round trip.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::wire::{
    self, Course, CreateReferralRequest, CreateReferralResponse, LoginRequest, LoginResponse,
    PointsResponse, SignupRequest, SignupResponse, VerifyReferralRequest, VerifyReferralResponse,
};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
}

impl ApiClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()?;
        Ok(Self { http, api_url: config.api_url.clone() })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        wire::endpoint(&self.api_url, path)
    }

    /// `POST /api/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-2xx status, or a transport error.
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse> {
        tracing::debug!(email = %body.email, "login request");
        let request = self.http.post(self.url(wire::LOGIN_PATH)).json(body);
        send_json(request).await
    }

    /// `POST /api/signup`. An empty success body is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-2xx status, or a transport error.
    pub async fn signup(&self, body: &SignupRequest) -> Result<SignupResponse> {
        tracing::debug!(email = %body.email, "signup request");
        let request = self.http.post(self.url(wire::SIGNUP_PATH)).json(body);
        let text = send_text(request).await?;
        if text.trim().is_empty() {
            return Ok(SignupResponse::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// `GET /api/user/points`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-2xx status, or a transport error.
    pub async fn fetch_points(&self, token: &str) -> Result<i64> {
        let request = self.http.get(self.url(wire::POINTS_PATH)).header(AUTHORIZATION, auth_header(token)?);
        let body: PointsResponse = send_json(request).await?;
        Ok(body.points)
    }

    /// `GET /api/courses`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-2xx status, or a transport error.
    pub async fn fetch_courses(&self, token: &str) -> Result<Vec<Course>> {
        let request = self.http.get(self.url(wire::COURSES_PATH)).header(AUTHORIZATION, auth_header(token)?);
        let courses: Vec<Course> = send_json(request).await?;
        tracing::debug!(count = courses.len(), "courses fetched");
        Ok(courses)
    }

    /// `POST /api/createReferralCode`; returns the new code.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-2xx status, or a transport error.
    pub async fn create_referral_code(&self, token: &str, body: &CreateReferralRequest) -> Result<String> {
        let request = self
            .http
            .post(self.url(wire::CREATE_REFERRAL_PATH))
            .header(AUTHORIZATION, auth_header(token)?)
            .json(body);
        let response: CreateReferralResponse = send_json(request).await?;
        Ok(response.referral_code)
    }

    /// `POST /api/verifyReferralCode`; returns the updated point balance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on a non-2xx status, or a transport error.
    pub async fn verify_referral_code(&self, token: &str, body: &VerifyReferralRequest) -> Result<i64> {
        let request = self
            .http
            .post(self.url(wire::VERIFY_REFERRAL_PATH))
            .header(AUTHORIZATION, auth_header(token)?)
            .json(body);
        let response: VerifyReferralResponse = send_json(request).await?;
        Ok(response.points)
    }
}

fn auth_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&wire::bearer(token))?;
    value.set_sensitive(true);
    Ok(value)
}

async fn send_text(request: reqwest::RequestBuilder) -> Result<String> {
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "request rejected");
        return Err(rejected(status.as_u16(), &text));
    }
    Ok(text)
}

async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let text = send_text(request).await?;
    Ok(serde_json::from_str(&text)?)
}

fn rejected(status: u16, body: &str) -> ClientError {
    ClientError::Rejected { status, message: wire::rejection_message(body) }
}

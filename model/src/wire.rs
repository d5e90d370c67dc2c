//! Request and response bodies of the course API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend verbatim (`course_points`, `referralCode`),
//! so serde derives stay thin. Point balances the client computes with are
//! accepted as numbers or numeric strings. Course price and points are only
//! displayed, so they keep the backend's text and tolerate null or missing
//! values: one odd record must not hide the rest of the catalog.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Origin of the development backend.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";

pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";
pub const POINTS_PATH: &str = "/api/user/points";
pub const COURSES_PATH: &str = "/api/courses";
pub const CREATE_REFERRAL_PATH: &str = "/api/createReferralCode";
pub const VERIFY_REFERRAL_PATH: &str = "/api/verifyReferralCode";

/// Join an API origin and an endpoint path, tolerating a trailing slash.
#[must_use]
pub fn endpoint(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

/// Value for the `Authorization` header.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Course identifier as issued by the backend (numeric or textual).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CourseId {
    /// Integers become [`CourseId::Number`], anything else stays text.
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(trimmed.to_owned()),
        }
    }
}

/// A purchasable course from `GET /api/courses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: CourseId,
    #[serde(default)]
    pub description: String,
    /// Price as sent; `None` when null, missing or not a scalar.
    #[serde(default, deserialize_with = "deserialize_scalar_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_text")]
    pub course_points: Option<String>,
    #[serde(default)]
    pub image_path: String,
}

impl Course {
    /// Price for display, e.g. `"$49.99"`; just `"$"` when absent.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price.as_deref().unwrap_or_default())
    }

    /// Course points for display; empty when absent.
    #[must_use]
    pub fn points_label(&self) -> &str {
        self.course_points.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    #[serde(deserialize_with = "deserialize_i64_from_number_or_string")]
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReferralRequest {
    pub referred_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReferralResponse {
    #[serde(rename = "referralCode")]
    pub referral_code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReferralRequest {
    pub referral_code: String,
    pub referred_user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReferralResponse {
    #[serde(deserialize_with = "deserialize_i64_from_number_or_string")]
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract the backend's `message` from a raw error body, if any.
///
/// Bodies that are not JSON, or carry a blank message, yield `None`.
#[must_use]
pub fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

fn deserialize_i64_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected integer string")),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Keep a scalar field's text as the backend wrote it. Null, arrays and
/// objects read as `None`.
fn deserialize_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    })
}

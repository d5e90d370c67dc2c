//! Form input checks run before a request is sent.
//!
//! Only emptiness is checked; everything else is the backend's call.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::wire::{LoginRequest, SignupRequest};

pub const LOGIN_INCOMPLETE: &str = "Enter both email and password.";
pub const SIGNUP_INCOMPLETE: &str = "Fill in name, email and password.";
pub const REFERRAL_CODE_EMPTY: &str = "Enter a referral code.";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed";

/// Trim the email and require both fields. The password is sent as typed.
///
/// # Errors
///
/// Returns [`LOGIN_INCOMPLETE`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LOGIN_INCOMPLETE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Trim name and email and require all three fields.
///
/// # Errors
///
/// Returns [`SIGNUP_INCOMPLETE`] when any field is blank.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(SIGNUP_INCOMPLETE);
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Trim a typed referral code and require it to be non-empty.
///
/// # Errors
///
/// Returns [`REFERRAL_CODE_EMPTY`] for blank input.
pub fn validate_referral_code(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(REFERRAL_CODE_EMPTY);
    }
    Ok(code.to_owned())
}

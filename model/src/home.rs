//! Homepage view state: point balance, course catalog and referral flow.
//!
//! DESIGN
//! ======
//! Each user action is split into a `begin_*` step that checks preconditions
//! and produces the request body, and a `finish_*` step that folds the
//! request outcome back in. The transport in between belongs to the caller,
//! so the same transitions drive the browser and the terminal.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as one message in [`HomeState::error`]. Backend
//! rejections may supply their own text for referral actions; the catalog
//! fetches always use fixed messages.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::input::validate_referral_code;
use crate::session::Session;
use crate::wire::{Course, CourseId, CreateReferralRequest, VerifyReferralRequest};

pub const POINTS_FAILED: &str = "Failed to fetch user points";
pub const COURSES_FAILED: &str = "Failed to fetch courses";
pub const FETCH_FAILED: &str = "Error fetching data";
pub const GENERATE_FAILED: &str = "Error generating referral code";
pub const VERIFY_FAILED: &str = "Error verifying referral code";
pub const GENERATE_NEEDS_LOGIN: &str = "You need to be logged in to generate a referral code.";
pub const VERIFY_NEEDS_LOGIN: &str = "You need to be logged in to verify a referral code.";

pub const LOADING_LABEL: &str = "Loading...";
pub const NO_CODE_LABEL: &str = "Not generated";
pub const NO_COURSES_LABEL: &str = "No courses available";

/// Why a request did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// The backend answered with a non-2xx status.
    #[error("request rejected: {message:?}")]
    Rejected { message: Option<String> },
    /// The request never completed or the body could not be decoded.
    #[error("request failed before a usable response")]
    Transport,
}

impl Failure {
    /// The backend's message for a rejection, else `fallback`.
    #[must_use]
    pub fn message_or(self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message) } => message,
            Self::Rejected { message: None } | Self::Transport => fallback.to_owned(),
        }
    }
}

/// Whether the entry sequence should go on to fetch the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStep {
    Continue,
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeState {
    pub courses: Vec<Course>,
    pub points: Option<i64>,
    /// Text typed into the verify box.
    pub referral_input: String,
    pub generated_code: Option<String>,
    pub selected_course: Option<CourseId>,
    pub error: Option<String>,
    pub loading: bool,
    pub generating: bool,
    pub verifying: bool,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            points: None,
            referral_input: String::new(),
            generated_code: None,
            selected_course: None,
            error: None,
            loading: true,
            generating: false,
            verifying: false,
        }
    }
}

impl HomeState {
    /// Fold in the `GET /api/user/points` outcome.
    ///
    /// A rejection is reported but the catalog is still fetched; a transport
    /// failure ends the entry sequence.
    pub fn apply_points(&mut self, result: Result<i64, Failure>) -> LoadStep {
        match result {
            Ok(points) => {
                self.points = Some(points);
                LoadStep::Continue
            }
            Err(Failure::Rejected { .. }) => {
                self.error = Some(POINTS_FAILED.to_owned());
                LoadStep::Continue
            }
            Err(Failure::Transport) => {
                self.error = Some(FETCH_FAILED.to_owned());
                self.loading = false;
                LoadStep::Stop
            }
        }
    }

    /// Fold in the `GET /api/courses` outcome and end loading.
    ///
    /// A successful catalog clears any earlier points error.
    pub fn apply_courses(&mut self, result: Result<Vec<Course>, Failure>) {
        match result {
            Ok(courses) => {
                self.courses = courses;
                self.error = None;
            }
            Err(Failure::Rejected { .. }) => self.error = Some(COURSES_FAILED.to_owned()),
            Err(Failure::Transport) => self.error = Some(FETCH_FAILED.to_owned()),
        }
        self.loading = false;
    }

    #[must_use]
    pub fn points_label(&self) -> String {
        self.points.map_or_else(|| LOADING_LABEL.to_owned(), |points| points.to_string())
    }

    #[must_use]
    pub fn code_label(&self) -> &str {
        self.generated_code.as_deref().unwrap_or(NO_CODE_LABEL)
    }

    pub fn select_course(&mut self, course_id: CourseId) {
        self.selected_course = Some(course_id);
    }

    /// Course referral actions apply to: the selection, else the first course.
    #[must_use]
    pub fn target_course(&self) -> Option<CourseId> {
        self.selected_course
            .clone()
            .or_else(|| self.courses.first().map(|course| course.course_id.clone()))
    }

    /// Start a referral-code generation. Returns `None` when one is already
    /// running or the session lacks a token or email.
    pub fn begin_generate(
        &mut self,
        session: Option<&Session>,
        course_id: Option<CourseId>,
    ) -> Option<CreateReferralRequest> {
        if self.generating {
            return None;
        }
        let Some((_, email)) = session.and_then(Session::credentials) else {
            self.error = Some(GENERATE_NEEDS_LOGIN.to_owned());
            return None;
        };
        if let Some(course_id) = course_id {
            self.selected_course = Some(course_id);
        }
        self.generating = true;
        Some(CreateReferralRequest { referred_by: email.to_owned(), course_id: self.target_course() })
    }

    pub fn finish_generate(&mut self, result: Result<String, Failure>) {
        self.generating = false;
        match result {
            Ok(code) => {
                self.generated_code = Some(code);
                self.error = None;
            }
            Err(failure) => self.error = Some(failure.message_or(GENERATE_FAILED)),
        }
    }

    /// Start verifying the code in [`HomeState::referral_input`]. Returns
    /// `None` when a verification is running, the session is incomplete, or
    /// the input is blank.
    pub fn begin_verify(&mut self, session: Option<&Session>) -> Option<VerifyReferralRequest> {
        if self.verifying {
            return None;
        }
        let Some((_, email)) = session.and_then(Session::credentials) else {
            self.error = Some(VERIFY_NEEDS_LOGIN.to_owned());
            return None;
        };
        let referral_code = match validate_referral_code(&self.referral_input) {
            Ok(code) => code,
            Err(message) => {
                self.error = Some(message.to_owned());
                return None;
            }
        };
        self.verifying = true;
        Some(VerifyReferralRequest {
            referral_code,
            referred_user: email.to_owned(),
            course_id: self.target_course(),
        })
    }

    pub fn finish_verify(&mut self, result: Result<i64, Failure>) {
        self.verifying = false;
        match result {
            Ok(points) => {
                self.points = Some(points);
                self.error = None;
            }
            Err(failure) => self.error = Some(failure.message_or(VERIFY_FAILED)),
        }
    }
}

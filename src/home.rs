//! Homepage request sequences.
//!
//! Drives [`HomeState`] transitions with real requests: points then courses
//! on entry, and one round trip per referral action. Requests are issued one
//! after another; nothing is retried.

use model::home::LoadStep;
use model::{CourseId, HomeState, Session};

use crate::api::ApiClient;
use crate::error::Result;
use crate::session::SessionStore;

/// Result of entering the homepage.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEntry {
    /// No stored token; send the user to the login view.
    RedirectToLogin,
    /// Data fetch settled, possibly with an error recorded in the state.
    Ready(HomeState),
}

pub struct HomePage<'a, S: SessionStore> {
    api: &'a ApiClient,
    store: &'a S,
}

impl<'a, S: SessionStore> HomePage<'a, S> {
    pub fn new(api: &'a ApiClient, store: &'a S) -> Self {
        Self { api, store }
    }

    /// Load the point balance and the catalog for the stored session.
    ///
    /// # Errors
    ///
    /// Only session storage failures are returned; request failures are
    /// recorded in the returned state.
    pub async fn enter(&self) -> Result<HomeEntry> {
        let Some(session) = self.store.load()? else {
            tracing::info!("no session; redirecting to login");
            return Ok(HomeEntry::RedirectToLogin);
        };
        Ok(HomeEntry::Ready(self.load(&session).await))
    }

    async fn load(&self, session: &Session) -> HomeState {
        let mut state = HomeState::default();

        let points = self.api.fetch_points(&session.token).await;
        if let Err(e) = &points {
            tracing::warn!(error = %e, "points fetch failed");
        }
        if state.apply_points(points.map_err(|e| e.failure())) == LoadStep::Stop {
            return state;
        }

        let courses = self.api.fetch_courses(&session.token).await;
        if let Err(e) = &courses {
            tracing::warn!(error = %e, "course fetch failed");
        }
        state.apply_courses(courses.map_err(|e| e.failure()));
        state
    }

    /// Request a referral code for `course_id`, or the state's target course.
    ///
    /// # Errors
    ///
    /// Only session storage failures are returned.
    pub async fn generate_referral_code(
        &self,
        state: &mut HomeState,
        course_id: Option<CourseId>,
    ) -> Result<()> {
        let session = self.store.load()?;
        let Some(body) = state.begin_generate(session.as_ref(), course_id) else {
            return Ok(());
        };
        let Some(session) = session else {
            return Ok(());
        };
        tracing::info!(course_id = ?body.course_id, "generating referral code");
        let result = self.api.create_referral_code(&session.token, &body).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "referral code generation failed");
        }
        state.finish_generate(result.map_err(|e| e.failure()));
        Ok(())
    }

    /// Verify the code held in `state.referral_input`.
    ///
    /// # Errors
    ///
    /// Only session storage failures are returned.
    pub async fn verify_referral_code(&self, state: &mut HomeState) -> Result<()> {
        let session = self.store.load()?;
        let Some(body) = state.begin_verify(session.as_ref()) else {
            return Ok(());
        };
        let Some(session) = session else {
            return Ok(());
        };
        tracing::info!(course_id = ?body.course_id, "verifying referral code");
        let result = self.api.verify_referral_code(&session.token, &body).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "referral code verification failed");
        }
        state.finish_verify(result.map_err(|e| e.failure()));
        Ok(())
    }
}

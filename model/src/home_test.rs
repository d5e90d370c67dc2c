use super::*;

// =============================================================
// Helpers
// =============================================================

fn course(id: i64, points: i64) -> Course {
    Course {
        course_id: CourseId::Number(id),
        description: format!("Course {id}"),
        price: Some("10".to_owned()),
        course_points: Some(points.to_string()),
        image_path: format!("/img/{id}.png"),
    }
}

fn session() -> Session {
    Session::new("tok-1", "ann@example.com")
}

fn loaded() -> HomeState {
    let mut state = HomeState::default();
    assert_eq!(state.apply_points(Ok(40)), LoadStep::Continue);
    state.apply_courses(Ok(vec![course(1, 10), course(2, 20)]));
    state
}

// =============================================================
// Entry sequence
// =============================================================

#[test]
fn default_state_is_loading_with_placeholders() {
    let state = HomeState::default();
    assert!(state.loading);
    assert_eq!(state.points_label(), LOADING_LABEL);
    assert_eq!(state.code_label(), NO_CODE_LABEL);
    assert!(state.error.is_none());
}

#[test]
fn successful_entry_shows_points_and_one_entry_per_course() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.points_label(), "40");
    assert_eq!(state.courses.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn rejected_points_still_fetch_courses() {
    let mut state = HomeState::default();
    let step = state.apply_points(Err(Failure::Rejected { message: None }));
    assert_eq!(step, LoadStep::Continue);
    assert_eq!(state.error.as_deref(), Some(POINTS_FAILED));
    state.apply_courses(Ok(vec![course(1, 10)]));
    assert_eq!(state.courses.len(), 1);
    assert!(!state.loading);
}

#[test]
fn loaded_courses_clear_an_earlier_points_error() {
    let mut state = HomeState::default();
    state.apply_points(Err(Failure::Rejected { message: None }));
    state.apply_courses(Ok(vec![course(1, 10)]));
    assert!(state.error.is_none());
    assert_eq!(state.points_label(), LOADING_LABEL);
}

#[test]
fn rejected_courses_replace_an_earlier_points_error() {
    let mut state = HomeState::default();
    state.apply_points(Err(Failure::Rejected { message: None }));
    state.apply_courses(Err(Failure::Rejected { message: None }));
    assert_eq!(state.error.as_deref(), Some(COURSES_FAILED));
}

#[test]
fn transport_failure_on_points_stops_the_sequence() {
    let mut state = HomeState::default();
    let step = state.apply_points(Err(Failure::Transport));
    assert_eq!(step, LoadStep::Stop);
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));
    assert!(!state.loading);
    assert!(state.courses.is_empty());
}

#[test]
fn rejected_courses_show_error_and_no_courses() {
    let mut state = HomeState::default();
    state.apply_points(Ok(5));
    state.apply_courses(Err(Failure::Rejected { message: Some("nope".to_owned()) }));
    assert_eq!(state.error.as_deref(), Some(COURSES_FAILED));
    assert!(state.courses.is_empty());
    assert!(!state.loading);
}

#[test]
fn transport_failure_on_courses_uses_generic_message() {
    let mut state = HomeState::default();
    state.apply_points(Ok(5));
    state.apply_courses(Err(Failure::Transport));
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));
}

// =============================================================
// Course targeting
// =============================================================

#[test]
fn target_course_defaults_to_first_course() {
    let state = loaded();
    assert_eq!(state.target_course(), Some(CourseId::Number(1)));
}

#[test]
fn target_course_prefers_selection() {
    let mut state = loaded();
    state.select_course(CourseId::Number(2));
    assert_eq!(state.target_course(), Some(CourseId::Number(2)));
}

#[test]
fn target_course_is_none_for_empty_catalog() {
    let mut state = HomeState::default();
    state.apply_courses(Ok(Vec::new()));
    assert_eq!(state.target_course(), None);
}

// =============================================================
// Generate
// =============================================================

#[test]
fn begin_generate_without_session_reports_login_needed() {
    let mut state = loaded();
    assert!(state.begin_generate(None, None).is_none());
    assert_eq!(state.error.as_deref(), Some(GENERATE_NEEDS_LOGIN));
    assert!(!state.generating);
}

#[test]
fn begin_generate_without_email_reports_login_needed() {
    let mut state = loaded();
    let tokens_only = Session { token: "tok".to_owned(), email: None };
    assert!(state.begin_generate(Some(&tokens_only), None).is_none());
    assert_eq!(state.error.as_deref(), Some(GENERATE_NEEDS_LOGIN));
}

#[test]
fn begin_generate_builds_request_for_chosen_course() {
    let mut state = loaded();
    let req = state
        .begin_generate(Some(&session()), Some(CourseId::Number(2)))
        .expect("request");
    assert_eq!(req.referred_by, "ann@example.com");
    assert_eq!(req.course_id, Some(CourseId::Number(2)));
    assert!(state.generating);
    assert_eq!(state.selected_course, Some(CourseId::Number(2)));
}

#[test]
fn begin_generate_is_refused_while_in_flight() {
    let mut state = loaded();
    assert!(state.begin_generate(Some(&session()), None).is_some());
    assert!(state.begin_generate(Some(&session()), None).is_none());
}

#[test]
fn finish_generate_success_shows_code_and_clears_error() {
    let mut state = loaded();
    state.error = Some("old".to_owned());
    state.begin_generate(Some(&session()), None);
    state.finish_generate(Ok("REF-77".to_owned()));
    assert_eq!(state.code_label(), "REF-77");
    assert!(state.error.is_none());
    assert!(!state.generating);
}

#[test]
fn finish_generate_rejection_prefers_backend_message() {
    let mut state = loaded();
    state.begin_generate(Some(&session()), None);
    state.finish_generate(Err(Failure::Rejected { message: Some("Already referred".to_owned()) }));
    assert_eq!(state.error.as_deref(), Some("Already referred"));

    state.begin_generate(Some(&session()), None);
    state.finish_generate(Err(Failure::Rejected { message: None }));
    assert_eq!(state.error.as_deref(), Some(GENERATE_FAILED));

    state.begin_generate(Some(&session()), None);
    state.finish_generate(Err(Failure::Transport));
    assert_eq!(state.error.as_deref(), Some(GENERATE_FAILED));
    assert_eq!(state.code_label(), NO_CODE_LABEL);
}

// =============================================================
// Verify
// =============================================================

#[test]
fn begin_verify_without_session_reports_login_needed() {
    let mut state = loaded();
    state.referral_input = "REF-1".to_owned();
    assert!(state.begin_verify(None).is_none());
    assert_eq!(state.error.as_deref(), Some(VERIFY_NEEDS_LOGIN));
}

#[test]
fn begin_verify_rejects_blank_code() {
    let mut state = loaded();
    state.referral_input = "   ".to_owned();
    assert!(state.begin_verify(Some(&session())).is_none());
    assert_eq!(state.error.as_deref(), Some(crate::input::REFERRAL_CODE_EMPTY));
    assert!(!state.verifying);
}

#[test]
fn begin_verify_builds_request_for_first_course() {
    let mut state = loaded();
    state.referral_input = " REF-1 ".to_owned();
    let req = state.begin_verify(Some(&session())).expect("request");
    assert_eq!(req.referral_code, "REF-1");
    assert_eq!(req.referred_user, "ann@example.com");
    assert_eq!(req.course_id, Some(CourseId::Number(1)));
    assert!(state.verifying);
    assert!(state.begin_verify(Some(&session())).is_none());
}

#[test]
fn begin_verify_is_refused_while_in_flight() {
    let mut state = loaded();
    state.referral_input = "REF-1".to_owned();
    assert!(state.begin_verify(Some(&session())).is_some());
    let in_flight = state.clone();

    assert!(state.begin_verify(Some(&session())).is_none());
    assert_eq!(state, in_flight);
    assert!(state.verifying);
}

#[test]
fn finish_verify_success_updates_points() {
    let mut state = loaded();
    state.referral_input = "REF-1".to_owned();
    state.begin_verify(Some(&session()));
    state.finish_verify(Ok(140));
    assert_eq!(state.points_label(), "140");
    assert!(state.error.is_none());
    assert!(!state.verifying);
}

#[test]
fn finish_verify_failure_keeps_points() {
    let mut state = loaded();
    state.referral_input = "REF-1".to_owned();
    state.begin_verify(Some(&session()));
    state.finish_verify(Err(Failure::Rejected { message: Some("Invalid referral code".to_owned()) }));
    assert_eq!(state.error.as_deref(), Some("Invalid referral code"));
    assert_eq!(state.points, Some(40));

    state.begin_verify(Some(&session()));
    state.finish_verify(Err(Failure::Transport));
    assert_eq!(state.error.as_deref(), Some(VERIFY_FAILED));
}

// =============================================================
// Failure
// =============================================================

#[test]
fn message_or_uses_backend_text_only_for_rejections() {
    let rejected = Failure::Rejected { message: Some("Email taken".to_owned()) };
    assert_eq!(rejected.message_or("Signup failed"), "Email taken");
    assert_eq!(Failure::Rejected { message: None }.message_or("Signup failed"), "Signup failed");
    assert_eq!(Failure::Transport.message_or("Login failed"), "Login failed");
}

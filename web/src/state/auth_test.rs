use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_logged_in());
    assert!(state.token().is_none());
}

#[test]
fn auth_state_with_session_exposes_token() {
    let state = AuthState { session: Some(Session::new("tok-1", "a@b.com")) };
    assert!(state.is_logged_in());
    assert_eq!(state.token().as_deref(), Some("tok-1"));
}

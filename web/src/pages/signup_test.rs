use super::*;

#[test]
fn signup_button_label_reflects_busy_state() {
    assert_eq!(signup_button_label(false), "Sign Up");
    assert_eq!(signup_button_label(true), "Signing up...");
}

use super::*;

#[test]
fn generate_button_label_reflects_in_flight_request() {
    assert_eq!(generate_button_label(false), "Generate Referral Code");
    assert_eq!(generate_button_label(true), "Generating...");
}

#[test]
fn verify_button_label_reflects_in_flight_request() {
    assert_eq!(verify_button_label(false), "Verify Referral Code");
    assert_eq!(verify_button_label(true), "Verifying...");
}

use super::*;
use crate::config::Timeouts;

#[test]
fn client_keeps_normalized_api_url() {
    let config = ClientConfig::new("http://127.0.0.1:9/", Timeouts::default());
    let client = ApiClient::new(&config).expect("client");
    assert_eq!(client.api_url(), "http://127.0.0.1:9");
    assert_eq!(client.url(wire::POINTS_PATH), "http://127.0.0.1:9/api/user/points");
}

#[test]
fn auth_header_is_bearer_and_sensitive() {
    let value = auth_header("tok-1").expect("header");
    assert_eq!(value.to_str().expect("ascii"), "Bearer tok-1");
    assert!(value.is_sensitive());
}

#[test]
fn auth_header_rejects_control_characters() {
    assert!(matches!(auth_header("bad\ntoken"), Err(ClientError::InvalidHeader(_))));
}

#[test]
fn rejected_extracts_backend_message() {
    let err = rejected(409, r#"{"message":"Referral code already exists"}"#);
    assert!(matches!(
        err,
        ClientError::Rejected { status: 409, message: Some(ref m) } if m == "Referral code already exists"
    ));
}

#[test]
fn rejected_without_json_body_has_no_message() {
    let err = rejected(502, "Bad Gateway");
    assert!(matches!(err, ClientError::Rejected { status: 502, message: None }));
}

//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn serialises_message_under_error_key() {
    let err = Error::invalid_request("Username is required")
        .with_details(json!({ "field": "username", "code": "missing_field" }));

    let value = serde_json::to_value(&err).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "error": "Username is required",
            "code": "invalid_request",
            "details": { "field": "username", "code": "missing_field" },
        })
    );
}

#[rstest]
fn serialises_trace_id_in_camel_case() {
    let err = Error::not_found("User not found").with_trace_id("abc");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value.get("traceId").and_then(|v| v.as_str()), Some("abc"));
}

#[rstest]
fn deserialisation_rejects_blank_message() {
    let payload = json!({ "error": " ", "code": "internal_error" });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[tokio::test]
async fn new_captures_scoped_trace_id() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
        .parse()
        .expect("valid trace id");

    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;

    assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::internal("db down").to_string(), "db down");
}

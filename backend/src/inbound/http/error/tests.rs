//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn error_response_echoes_trace_id_in_header_and_body() {
    let error = Error::not_found("User not found").with_trace_id(TRACE_ID);

    let response = ResponseError::error_response(&error);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    assert_eq!(header, TRACE_ID);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "error": "User not found", "code": "not_found", "traceId": TRACE_ID })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_keep_their_message() {
    let response = ResponseError::error_response(&Error::internal("connection reset"));

    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let body = body_json(response).await;
    assert_eq!(body["error"], "connection reset");
    assert_eq!(body["code"], "internal_error");
}

#[rstest]
#[actix_web::test]
async fn json_payload_errors_become_invalid_requests() {
    let req = TestRequest::default().to_http_request();

    let err = json_error_handler(JsonPayloadError::ContentType, &req);
    let response = err.error_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("invalid JSON body"))
    );
}

#[rstest]
#[actix_web::test]
async fn form_payload_errors_become_invalid_requests() {
    let req = TestRequest::default().to_http_request();

    let err = form_error_handler(UrlencodedError::ContentType, &req);

    assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
}

//! Handler tests for the users endpoints.

use super::*;
use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::in_memory_state;

macro_rules! users_app {
    ($state:expr) => {
        test::init_service(
            App::new().app_data($state).service(
                web::scope("/api")
                    .service(create_user)
                    .service(list_users),
            ),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn creates_user_from_json_body() {
    let (state, _) = in_memory_state();
    let app = users_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "ada" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["username"], "ada");
    assert!(body["_id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[rstest]
#[actix_web::test]
async fn creates_user_from_form_body() {
    let (state, _) = in_memory_state();
    let app = users_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_form([("username", "grace")])
        .to_request();
    let body: UserResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.username, "grace");
}

#[rstest]
#[actix_web::test]
async fn repeated_username_returns_same_identifier() {
    let (state, repo) = in_memory_state();
    let app = users_app!(state);

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_form([("username", "ada")])
            .to_request();
        let body: UserResponse = test::call_and_read_body_json(&app, req).await;
        ids.push(body.id);
    }

    assert_eq!(ids[0], ids[1]);
    assert_eq!(repo.len().expect("store size"), 1);
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "username": "" }))]
#[case(json!({ "username": "   " }))]
#[case(json!({ "username": null }))]
#[actix_web::test]
async fn missing_username_is_rejected(#[case] payload: Value) {
    let (state, repo) = in_memory_state();
    let app = users_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Username is required");
    assert_eq!(body["details"]["field"], "username");
    assert!(repo.is_empty().expect("store state"));
}

#[rstest]
#[actix_web::test]
async fn empty_post_is_rejected() {
    let (state, _) = in_memory_state();
    let app = users_app!(state);

    let req = test::TestRequest::post().uri("/api/users").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn undecodable_body_blames_no_field() {
    let (state, repo) = in_memory_state();
    let app = users_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"username": 42}"#)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Username is required");
    assert_eq!(body["details"], json!({ "code": "undecodable_body" }));
    assert!(repo.is_empty().expect("store state"));
}

#[rstest]
#[actix_web::test]
async fn lists_users_in_creation_order() {
    let (state, _) = in_memory_state();
    let app = users_app!(state);
    for name in ["zed", "ada"] {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_form([("username", name)])
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = users.iter().map(|user| user.username.as_str()).collect();
    assert_eq!(names, ["zed", "ada"]);
}

#[rstest]
#[actix_web::test]
async fn empty_store_lists_nothing() {
    let (state, _) = in_memory_state();
    let app = users_app!(state);

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!([]));
}

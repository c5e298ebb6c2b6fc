//! Handler tests for the exercise log endpoints.

use super::*;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error as ActixError, test};
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{FIXTURE_TODAY, in_memory_state};
use crate::inbound::http::users::{UserResponse, create_user};

const UNKNOWN_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn tracker_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = ActixError> {
    let (state, _) = in_memory_state();
    test::init_service(
        App::new().app_data(state).service(
            web::scope("/api")
                .service(create_user)
                .service(append_exercise)
                .service(get_log),
        ),
    )
    .await
}

async fn register<S>(app: &S, username: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_form([("username", username)])
        .to_request();
    let user: UserResponse = test::call_and_read_body_json(app, req).await;
    user.id
}

async fn post_exercise<S>(app: &S, user_id: &str, payload: Value) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(payload)
        .to_request();
    test::call_service(app, req).await
}

async fn get_logs<S>(app: &S, user_id: &str, query: &str) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = ActixError>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{user_id}/logs{query}"))
        .to_request();
    test::call_service(app, req).await
}

#[rstest]
#[actix_web::test]
async fn appends_exercise_with_rendered_date() {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let res = post_exercise(
        &app,
        &id,
        json!({ "description": "run", "duration": 30, "date": "2023-01-02" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "_id": id,
            "username": "ada",
            "date": "Mon Jan 02 2023",
            "duration": 30,
            "description": "run",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn appends_exercise_from_form_with_text_duration() {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/users/{id}/exercises"))
        .set_form([("description", "swim"), ("duration", "45"), ("date", "")])
        .to_request();
    let body: ExerciseResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.duration, 45);
    assert_eq!(body.date, FIXTURE_TODAY);
}

#[rstest]
#[case(Some("not-a-date"))]
#[case(None)]
#[actix_web::test]
async fn invalid_or_missing_date_uses_today(#[case] date: Option<&str>) {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let mut payload = json!({ "description": "run", "duration": "20" });
    if let Some(date) = date {
        payload["date"] = json!(date);
    }
    let body: Value = test::read_body_json(post_exercise(&app, &id, payload).await).await;

    assert_eq!(body["date"], FIXTURE_TODAY);
}

#[rstest]
#[case(json!({ "duration": 30 }), "description")]
#[case(json!({ "description": "", "duration": 30 }), "description")]
#[case(json!({ "description": "run" }), "duration")]
#[case(json!({ "description": "run", "duration": "" }), "duration")]
#[actix_web::test]
async fn missing_fields_are_rejected(#[case] payload: Value, #[case] field: &str) {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let res = post_exercise(&app, &id, payload).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Description and duration are required");
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[case(json!({ "description": "run", "duration": true }))]
#[case(json!({ "description": ["run"], "duration": 30 }))]
#[actix_web::test]
async fn undecodable_body_blames_no_field(#[case] payload: Value) {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let res = post_exercise(&app, &id, payload).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Description and duration are required");
    assert_eq!(body["details"], json!({ "code": "undecodable_body" }));
    assert!(body["details"].get("field").is_none());
}

#[rstest]
#[case("2023/01/15", "Sun Jan 15 2023")]
#[case("01/15/2023", "Sun Jan 15 2023")]
#[case("January 5, 2023", "Thu Jan 05 2023")]
#[case("Jan 5, 2023", "Thu Jan 05 2023")]
#[actix_web::test]
async fn common_calendar_forms_are_stored_as_given(#[case] date: &str, #[case] expected: &str) {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let payload = json!({ "description": "run", "duration": "30", "date": date });
    let body: Value = test::read_body_json(post_exercise(&app, &id, payload).await).await;

    assert_eq!(body["date"], expected);
    assert_ne!(body["date"], FIXTURE_TODAY);
}

#[rstest]
#[actix_web::test]
async fn non_numeric_duration_is_rejected_and_log_unchanged() {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let res = post_exercise(&app, &id, json!({ "description": "run", "duration": "abc" })).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Duration must be a number");
    let log: LogResponse = test::read_body_json(get_logs(&app, &id, "").await).await;
    assert_eq!(log.count, 0);
}

#[rstest]
#[actix_web::test]
async fn fractional_duration_is_rejected() {
    let app = tracker_app().await;
    let id = register(&app, "ada").await;

    let res = post_exercise(&app, &id, json!({ "description": "run", "duration": 12.5 })).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Duration must be a whole number of minutes");
}

#[rstest]
#[actix_web::test]
async fn validation_precedes_user_lookup() {
    let app = tracker_app().await;

    let res = post_exercise(&app, UNKNOWN_ID, json!({ "description": "run" })).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(UNKNOWN_ID)]
#[case("not-a-uuid")]
#[actix_web::test]
async fn unknown_user_is_not_found_on_both_endpoints(#[case] user_id: &str) {
    let app = tracker_app().await;

    let res = post_exercise(
        &app,
        user_id,
        json!({ "description": "run", "duration": 30 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "User not found");

    let res = get_logs(&app, user_id, "").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

async fn seeded_log<S>(app: &S) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = ActixError>,
{
    let id = register(app, "ada").await;
    for (description, date) in [
        ("march", "2023-03-01"),
        ("january", "2023-01-01"),
        ("february", "2023-02-01"),
    ] {
        let res = post_exercise(
            app,
            &id,
            json!({ "description": description, "duration": 10, "date": date }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    id
}

#[rstest]
#[actix_web::test]
async fn log_window_returns_matching_entry_only() {
    let app = tracker_app().await;
    let id = seeded_log(&app).await;

    let res = get_logs(&app, &id, "?from=2023-01-15&to=2023-02-15").await;
    let body: Value = test::read_body_json(res).await;

    assert_eq!(
        body,
        json!({
            "_id": id,
            "username": "ada",
            "count": 1,
            "log": [{ "description": "february", "duration": 10, "date": "Wed Feb 01 2023" }],
        })
    );
}

#[rstest]
#[case("?limit=2", &["january", "february"])]
#[case("", &["january", "february", "march"])]
#[case("?limit=abc&from=garbage", &["january", "february", "march"])]
#[case("?limit=-1", &["january", "february", "march"])]
#[case("?limit=0", &[])]
#[actix_web::test]
async fn log_is_sorted_then_limited(#[case] query: &str, #[case] expected: &[&str]) {
    let app = tracker_app().await;
    let id = seeded_log(&app).await;

    let log: LogResponse = test::read_body_json(get_logs(&app, &id, query).await).await;

    let descriptions: Vec<&str> = log
        .log
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(descriptions, expected);
    assert_eq!(log.count, expected.len());
}

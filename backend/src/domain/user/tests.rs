//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn username() -> Username {
    Username::new("ada").expect("valid username")
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
#[case("507f1f77bcf86cd799439011", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_round_trips_through_display() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
    assert_eq!(UserId::from_uuid(*id.as_uuid()), id);
}

#[rstest]
fn random_ids_differ() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn username_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
}

#[rstest]
fn username_keeps_value_exactly() {
    let name = Username::new(" ada ").expect("non-blank username");
    assert_eq!(name.as_ref(), " ada ");
}

#[rstest]
fn register_starts_with_empty_log(username: Username) {
    let user = User::register(username.clone());
    assert!(user.log().is_empty());
    assert_eq!(user.username(), &username);
}

#[rstest]
fn summary_projects_id_and_username(username: Username) {
    let id = UserId::new(VALID_ID).expect("valid id");
    let user = User::new(id, username.clone(), Vec::new());

    let summary = user.summary();

    assert_eq!(summary.id(), &id);
    assert_eq!(summary.username(), &username);
}

//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn valid_fields() -> NewUserFields {
    NewUserFields {
        name: Some("Grace Hopper".to_owned()),
        email: Some("grace@example.com".to_owned()),
        password: Some("cobol".to_owned()),
        role: Some("manager".to_owned()),
        position_id: Some("2".to_owned()),
    }
}

#[rstest]
fn accepts_valid_fields(valid_fields: NewUserFields) {
    let draft = UserDraft::try_from_fields(valid_fields).expect("valid draft");

    assert_eq!(draft.email().as_ref(), "grace@example.com");
    assert_eq!(draft.password(), "cobol");
    assert_eq!(draft.role(), Role::Manager);
    assert_eq!(draft.position_id().map(AsRef::as_ref), Some("2"));
}

#[rstest]
#[case(None)]
#[case(Some(String::new()))]
#[case(Some("   ".to_owned()))]
fn blank_position_means_none(valid_fields: NewUserFields, #[case] position_id: Option<String>) {
    let fields = NewUserFields {
        position_id,
        ..valid_fields
    };
    let draft = UserDraft::try_from_fields(fields).expect("valid draft");
    assert!(draft.position_id().is_none());
}

#[rstest]
fn reports_every_violation_at_once() {
    let fields = NewUserFields {
        name: Some("  ".to_owned()),
        email: Some("not-an-email".to_owned()),
        password: Some(String::new()),
        role: Some("owner".to_owned()),
        position_id: None,
    };

    let violations = UserDraft::try_from_fields(fields).expect_err("invalid draft");

    assert_eq!(violations.fields(), vec!["name", "email", "password", "role"]);
}

#[rstest]
fn missing_fields_are_violations() {
    let violations =
        UserDraft::try_from_fields(NewUserFields::default()).expect_err("invalid draft");

    assert_eq!(violations.fields(), vec!["name", "email", "password", "role"]);
    assert!(violations.as_slice().iter().all(|v| v.code() == "missing"));
}

#[rstest]
#[case("admin@example.com", true)]
#[case("a@b", true)]
#[case("@example.com", false)]
#[case("admin@", false)]
#[case("a@b@c", false)]
#[case("ad min@example.com", false)]
fn email_shape(#[case] raw: &str, #[case] valid: bool) {
    assert_eq!(EmailAddress::new(raw).is_ok(), valid);
}

#[rstest]
fn from_draft_keeps_the_hash_not_the_password(valid_fields: NewUserFields) {
    let draft = UserDraft::try_from_fields(valid_fields).expect("valid draft");
    let user = User::from_draft(
        UserId::new("7").expect("valid id"),
        draft,
        PasswordHash::new("$2b$10$hash"),
    );

    assert_eq!(user.name().as_ref(), "Grace Hopper");
    assert_eq!(user.password_hash().as_ref(), "$2b$10$hash");
    assert_eq!(format!("{:?}", user.password_hash()), "PasswordHash(..)");
}

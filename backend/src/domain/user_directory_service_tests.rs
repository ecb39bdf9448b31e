//! Tests for the user directory service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockPositionRepository, MockUserRepository};
use crate::domain::service_test_support::{caller, position, user};
use crate::domain::{ErrorCode, PasswordHash, Role};

type TestDirectoryService =
    UserDirectoryService<MockUserRepository, MockPositionRepository, MockPasswordHasher>;

fn service(
    users: MockUserRepository,
    positions: MockPositionRepository,
    hasher: MockPasswordHasher,
) -> TestDirectoryService {
    UserDirectoryService::new(Arc::new(users), Arc::new(positions), Arc::new(hasher))
}

fn new_user_fields(position_id: Option<&str>) -> NewUserFields {
    NewUserFields {
        name: Some("Grace Hopper".to_owned()),
        email: Some("grace@example.com".to_owned()),
        password: Some("cobol".to_owned()),
        role: Some("employee".to_owned()),
        position_id: position_id.map(str::to_owned),
    }
}

fn hashing_hasher() -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .withf(|password| password == "cobol")
        .times(1)
        .return_once(|_| Ok(PasswordHash::new("$2b$10$hashed")));
    hasher
}

#[rstest]
#[tokio::test]
async fn list_users_joins_current_positions() {
    let mut users = MockUserRepository::new();
    users.expect_list_users().times(1).return_once(|| {
        Ok(vec![
            user("1", "Admin User", Role::Admin, Some("1")),
            user("2", "Ed", Role::Employee, None),
        ])
    });
    let mut positions = MockPositionRepository::new();
    positions
        .expect_list_positions()
        .times(1)
        .return_once(|| Ok(vec![position("1", "Administrator", "#4F46E5")]));

    let views = service(users, positions, MockPasswordHasher::new())
        .list_users(&caller("2", Role::Employee))
        .await
        .expect("list succeeds");

    assert_eq!(views.len(), 2);
    assert_eq!(
        views[0].position.as_ref().map(|p| p.name()),
        Some("Administrator")
    );
    assert!(views[1].position.is_none());
}

#[rstest]
#[case(Role::Manager)]
#[case(Role::Employee)]
#[tokio::test]
async fn only_admins_create_users(#[case] role: Role) {
    let mut users = MockUserRepository::new();
    users.expect_insert().times(0);
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);

    let err = service(users, MockPositionRepository::new(), hasher)
        .create_user(&caller("9", role), new_user_fields(None))
        .await
        .expect_err("forbidden");

    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn forbidden_is_reported_before_validation() {
    let err = service(
        MockUserRepository::new(),
        MockPositionRepository::new(),
        MockPasswordHasher::new(),
    )
    .create_user(&caller("9", Role::Employee), NewUserFields::default())
    .await
    .expect_err("forbidden");

    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn create_user_stores_hash_and_returns_view() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .withf(|user| {
            user.password_hash().as_ref() == "$2b$10$hashed"
                && user.email().as_ref() == "grace@example.com"
        })
        .times(1)
        .return_once(|_| Ok(UserInsert::Stored));
    let mut positions = MockPositionRepository::new();
    positions
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(position("2", "Developer", "#10B981"))));

    let view = service(users, positions, hashing_hasher())
        .create_user(&caller("1", Role::Admin), new_user_fields(Some("2")))
        .await
        .expect("create succeeds");

    assert_eq!(view.name, "Grace Hopper");
    assert_eq!(view.role, Role::Employee);
    assert_eq!(view.position.map(|p| p.id().to_string()), Some("2".to_owned()));
    assert!(uuid::Uuid::parse_str(&view.id).is_ok());
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .return_once(|_| Ok(UserInsert::EmailTaken));

    let err = service(users, MockPositionRepository::new(), hashing_hasher())
        .create_user(&caller("1", Role::Admin), new_user_fields(None))
        .await
        .expect_err("conflict");

    assert_eq!(err.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn unknown_position_is_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .return_once(|_| Ok(UserInsert::UnknownPosition));

    let err = service(users, MockPositionRepository::new(), hashing_hasher())
        .create_user(&caller("1", Role::Admin), new_user_fields(Some("99")))
        .await
        .expect_err("not found");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "position 99 not found");
}

#[rstest]
#[tokio::test]
async fn invalid_fields_are_all_reported() {
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);

    let err = service(MockUserRepository::new(), MockPositionRepository::new(), hasher)
        .create_user(
            &caller("1", Role::Admin),
            NewUserFields {
                email: Some("nope".to_owned()),
                role: Some("owner".to_owned()),
                ..new_user_fields(None)
            },
        )
        .await
        .expect_err("invalid");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("details");
    let fields: Vec<&str> = details["violations"]
        .as_array()
        .expect("violations")
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "role"]);
}

#[rstest]
#[tokio::test]
async fn password_hashing_runs_off_the_runtime_thread() {
    let runtime_thread = std::thread::current().id();
    let hashed_on = Arc::new(std::sync::Mutex::new(None));
    let record = Arc::clone(&hashed_on);

    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .times(1)
        .return_once(|_| Ok(UserInsert::Stored));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(1).return_once(move |_| {
        *record.lock().expect("lock") = Some(std::thread::current().id());
        Ok(PasswordHash::new("$2b$10$hashed"))
    });

    service(users, MockPositionRepository::new(), hasher)
        .create_user(&caller("1", Role::Admin), new_user_fields(None))
        .await
        .expect("create succeeds");

    let hashed_on = (*hashed_on.lock().expect("lock")).expect("hash called");
    assert_ne!(hashed_on, runtime_thread);
}

//! Tests for login and user directory handlers.

use super::*;
use crate::domain::ports::{MockLoginService, MockUsersCommand, MockUsersQuery};
use crate::domain::{AccessToken, HexColor, Position, PositionId, Role};
use crate::inbound::http::test_utils::{bearer, http_state, identity};
use crate::inbound::http::validation::json_config;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

fn developer() -> Position {
    Position::new(
        PositionId::new("2").expect("position id"),
        "Developer".to_owned(),
        HexColor::new("#10B981").expect("colour"),
    )
}

fn admin_view() -> UserView {
    UserView {
        id: "1".to_owned(),
        name: "Admin User".to_owned(),
        email: "admin@example.com".to_owned(),
        role: Role::Admin,
        position: None,
    }
}

async fn send(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(login)
                    .service(list_users)
                    .service(create_user),
            ),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn violation_fields(body: &Value) -> Vec<String> {
    body["details"]["violations"]
        .as_array()
        .expect("violations array")
        .iter()
        .filter_map(|v| v["field"].as_str().map(str::to_owned))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn login_returns_token_and_user() {
    let mut login_service = MockLoginService::new();
    login_service
        .expect_login()
        .withf(|creds| creds.email() == "admin@example.com" && creds.password() == "admin")
        .times(1)
        .return_once(|_| {
            Ok(LoginOutcome {
                token: AccessToken::new("signed.jwt.value"),
                user: admin_view(),
            })
        });
    let state = http_state().with_login(login_service).build();

    let (status, body) = send(
        state,
        actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": " admin@example.com ", "password": "admin"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "signed.jwt.value");
    assert_eq!(body["user"]["email"], "admin@example.com");
    assert!(body["user"].get("password").is_none());
}

#[rstest]
#[case(json!({}), vec!["email", "password"])]
#[case(json!({"email": "  ", "password": "x"}), vec!["email"])]
#[case(json!({"email": "a@b", "password": ""}), vec!["password"])]
#[actix_web::test]
async fn login_reports_blank_fields(#[case] payload: Value, #[case] fields: Vec<&str>) {
    let mut login_service = MockLoginService::new();
    login_service.expect_login().never();
    let state = http_state().with_login(login_service).build();

    let (status, body) = send(
        state,
        actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(violation_fields(&body), fields);
}

#[rstest]
#[actix_web::test]
async fn login_rejects_bad_credentials() {
    let mut login_service = MockLoginService::new();
    login_service
        .expect_login()
        .return_once(|_| Err(Error::unauthorized("invalid credentials")));
    let state = http_state().with_login(login_service).build();

    let (status, body) = send(
        state,
        actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "admin@example.com", "password": "nope"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid credentials");
}

#[rstest]
#[actix_web::test]
async fn listing_users_requires_a_token() {
    let mut users = MockUsersQuery::new();
    users.expect_list_users().never();
    let state = http_state().with_users(users).build();

    let (status, body) = send(state, actix_test::TestRequest::get().uri("/api/users")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");
}

#[rstest]
#[actix_web::test]
async fn listing_users_passes_the_caller_through() {
    let mut users = MockUsersQuery::new();
    users
        .expect_list_users()
        .withf(|caller| caller.user_id().as_ref() == "9" && caller.role() == Role::Employee)
        .times(1)
        .return_once(|_| {
            let mut with_position = admin_view();
            with_position.position = Some(developer());
            Ok(vec![with_position])
        });
    let state = http_state()
        .with_users(users)
        .signed_in_as(identity("9", Role::Employee))
        .build();

    let (status, body) = send(
        state,
        actix_test::TestRequest::get()
            .uri("/api/users")
            .insert_header(bearer()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body[0]["position"],
        json!({"id": "2", "name": "Developer", "color": "#10B981"})
    );
}

#[rstest]
#[actix_web::test]
async fn creating_a_user_returns_201() {
    let mut command = MockUsersCommand::new();
    command
        .expect_create_user()
        .withf(|caller, fields| {
            caller.role() == Role::Admin
                && fields.email.as_deref() == Some("jo@example.com")
                && fields.position_id.as_deref() == Some("2")
        })
        .times(1)
        .return_once(|_, _| {
            Ok(UserView {
                id: "u-1".to_owned(),
                name: "Jo".to_owned(),
                email: "jo@example.com".to_owned(),
                role: Role::Employee,
                position: Some(developer()),
            })
        });
    let state = http_state()
        .with_users_command(command)
        .signed_in_as(identity("1", Role::Admin))
        .build();

    let (status, body) = send(
        state,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(bearer())
            .set_json(json!({
                "name": "Jo",
                "email": "jo@example.com",
                "password": "secret",
                "role": "employee",
                "position_id": "2",
            })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "u-1");
    assert_eq!(body["role"], "employee");
}

#[rstest]
#[case(Error::forbidden("admin role required"), StatusCode::FORBIDDEN)]
#[case(Error::conflict("email already registered"), StatusCode::CONFLICT)]
#[case(Error::not_found("position 9 not found"), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn user_creation_failures_map_to_statuses(
    #[case] error: Error,
    #[case] expected: StatusCode,
) {
    let mut command = MockUsersCommand::new();
    command.expect_create_user().return_once(move |_, _| Err(error));
    let state = http_state()
        .with_users_command(command)
        .signed_in_as(identity("1", Role::Admin))
        .build();

    let (status, _) = send(
        state,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(bearer())
            .set_json(json!({"name": "Jo"})),
    )
    .await;

    assert_eq!(status, expected);
}

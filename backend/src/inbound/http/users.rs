//! Login and user directory handlers.
//!
//! ```text
//! POST /api/auth/login {"email":"admin@example.com","password":"admin"}
//! GET  /api/users
//! POST /api/users {"name":"Jo","email":"jo@example.com","password":"pw","role":"employee","position_id":"2"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, FieldViolation, LoginCredentials, LoginOutcome, LoginValidationError, NewUserFields,
    UserView, Violations,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthContext;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@example.com")]
    pub email: Option<String>,
    #[schema(example = "admin")]
    pub password: Option<String>,
}

fn login_violation(err: &LoginValidationError) -> FieldViolation {
    let code = match err {
        LoginValidationError::EmptyEmail => "empty_email",
        LoginValidationError::EmptyPassword => "empty_password",
    };
    FieldViolation::new(err.field(), code, err.to_string())
}

fn parse_login_request(payload: LoginRequest) -> Result<LoginCredentials, Error> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    LoginCredentials::try_from_parts(&email, &password).map_err(|first| {
        let mut violations = Violations::new();
        violations.push(login_violation(&first));
        if first == LoginValidationError::EmptyEmail && password.is_empty() {
            violations.push(login_violation(&LoginValidationError::EmptyPassword));
        }
        violations.into_error("invalid login request")
    })
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginOutcome),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginOutcome>> {
    let credentials = parse_login_request(payload.into_inner())?;
    let outcome = state.login.login(&credentials).await?;
    Ok(web::Json(outcome))
}

/// List every user with their position resolved.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserView]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    auth: AuthContext,
) -> ApiResult<web::Json<Vec<UserView>>> {
    let users = state.users.list_users(auth.identity()).await?;
    Ok(web::Json(users))
}

/// Request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Jo Bloggs")]
    pub name: Option<String>,
    #[schema(example = "jo@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
    #[schema(example = "employee")]
    pub role: Option<String>,
    #[schema(example = "2")]
    pub position_id: Option<String>,
}

impl From<CreateUserRequest> for NewUserFields {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
            role: value.role,
            position_id: value.position_id,
        }
    }
}

/// Register a user. Admin only.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserView),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Position not found", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    auth: AuthContext,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(auth.identity(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(user))
}

#[cfg(test)]
mod tests;

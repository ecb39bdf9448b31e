//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (auth, users,
//!   positions, shifts, health)
//! - **Schemas**: domain views plus the error wrappers ([`ErrorSchema`],
//!   [`ErrorCodeSchema`]) that document the error envelope without coupling
//!   the domain error to utoipa
//! - **Security**: bearer token authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::domain::{LoginOutcome, Position, Role, ShiftOwnerView, ShiftView, UserView};
use crate::inbound::http::positions::PositionRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::shifts::ShiftRequest;
use crate::inbound::http::users::{CreateUserRequest, LoginRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme referenced by protected operations.
pub const BEARER_AUTH: &str = "BearerAuth";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /api/auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Shiftplan API",
        description = "Employees, positions and overlap-free shift scheduling behind bearer tokens."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::positions::list_positions,
        crate::inbound::http::positions::create_position,
        crate::inbound::http::positions::update_position,
        crate::inbound::http::positions::delete_position,
        crate::inbound::http::shifts::list_shifts,
        crate::inbound::http::shifts::create_shift,
        crate::inbound::http::shifts::update_shift,
        crate::inbound::http::shifts::delete_shift,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        Role,
        Position,
        UserView,
        ShiftOwnerView,
        ShiftView,
        LoginOutcome,
        LoginRequest,
        CreateUserRequest,
        PositionRequest,
        ShiftRequest,
    )),
    tags(
        (name = "auth", description = "Sign-in and token issuance"),
        (name = "users", description = "Employee directory"),
        (name = "positions", description = "Job positions"),
        (name = "shifts", description = "Shift scheduling"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Position registry handlers.
//!
//! ```text
//! GET    /api/positions
//! POST   /api/positions {"name":"Support","color":"#0EA5E9"}
//! PUT    /api/positions/{id} {"name":"Support","color":"#0EA5E9"}
//! DELETE /api/positions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Position, PositionFields, PositionId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthContext;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id};

const ID_FIELD: FieldName = FieldName::new("id");

/// Request body for creating or replacing a position.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PositionRequest {
    #[schema(example = "Support")]
    pub name: Option<String>,
    #[schema(example = "#0EA5E9")]
    pub color: Option<String>,
}

impl From<PositionRequest> for PositionFields {
    fn from(value: PositionRequest) -> Self {
        Self {
            name: value.name,
            color: value.color,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/positions",
    responses(
        (status = 200, description = "Positions in insertion order", body = [Position]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["positions"],
    operation_id = "listPositions"
)]
#[get("/positions")]
pub async fn list_positions(
    state: web::Data<HttpState>,
    auth: AuthContext,
) -> ApiResult<web::Json<Vec<Position>>> {
    let positions = state.positions.list_positions(auth.identity()).await?;
    Ok(web::Json(positions))
}

/// Create a position. Admin only.
#[utoipa::path(
    post,
    path = "/api/positions",
    request_body = PositionRequest,
    responses(
        (status = 201, description = "Position created", body = Position),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema)
    ),
    tags = ["positions"],
    operation_id = "createPosition"
)]
#[post("/positions")]
pub async fn create_position(
    state: web::Data<HttpState>,
    auth: AuthContext,
    payload: web::Json<PositionRequest>,
) -> ApiResult<HttpResponse> {
    let position = state
        .positions_command
        .create_position(auth.identity(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(position))
}

/// Replace a position's name and colour. Admin only.
#[utoipa::path(
    put,
    path = "/api/positions/{id}",
    params(("id" = String, Path, description = "Position identifier")),
    request_body = PositionRequest,
    responses(
        (status = 200, description = "Position updated", body = Position),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Position not found", body = ErrorSchema)
    ),
    tags = ["positions"],
    operation_id = "updatePosition"
)]
#[put("/positions/{id}")]
pub async fn update_position(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    payload: web::Json<PositionRequest>,
) -> ApiResult<web::Json<Position>> {
    let id = parse_path_id(path.into_inner(), ID_FIELD, PositionId::new)?;
    let position = state
        .positions_command
        .update_position(auth.identity(), &id, payload.into_inner().into())
        .await?;
    Ok(web::Json(position))
}

/// Delete a position nobody holds. Admin only.
#[utoipa::path(
    delete,
    path = "/api/positions/{id}",
    params(("id" = String, Path, description = "Position identifier")),
    responses(
        (status = 204, description = "Position deleted"),
        (status = 400, description = "Position still assigned to users", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Position not found", body = ErrorSchema)
    ),
    tags = ["positions"],
    operation_id = "deletePosition"
)]
#[delete("/positions/{id}")]
pub async fn delete_position(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner(), ID_FIELD, PositionId::new)?;
    state
        .positions_command
        .delete_position(auth.identity(), &id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockPositionsCommand, MockPositionsQuery};
    use crate::domain::{Error, HexColor, Role};
    use crate::inbound::http::test_utils::{bearer, http_state, identity};
    use crate::inbound::http::validation::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn position(id: &str, name: &str, color: &str) -> Position {
        Position::new(
            PositionId::new(id).expect("id"),
            name.to_owned(),
            HexColor::new(color).expect("colour"),
        )
    }

    async fn send(state: HttpState, request: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .service(
                    web::scope("/api")
                        .service(list_positions)
                        .service(create_position)
                        .service(update_position)
                        .service(delete_position),
                ),
        )
        .await;
        let response = test::call_service(&app, request.insert_header(bearer()).to_request()).await;
        let status = response.status();
        let body = test::read_body(response).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_positions_for_any_role() {
        let mut query = MockPositionsQuery::new();
        query.expect_list_positions().times(1).return_once(|_| {
            Ok(vec![
                position("1", "Administrator", "#4F46E5"),
                position("2", "Developer", "#10B981"),
            ])
        });
        let state = http_state()
            .with_positions(query)
            .signed_in_as(identity("5", Role::Employee))
            .build();

        let (status, body) = send(state, test::TestRequest::get().uri("/api/positions")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[1], json!({"id": "2", "name": "Developer", "color": "#10B981"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn create_returns_201_with_the_position() {
        let mut command = MockPositionsCommand::new();
        command
            .expect_create_position()
            .withf(|_, fields| {
                fields.name.as_deref() == Some("Support")
                    && fields.color.as_deref() == Some("#0EA5E9")
            })
            .return_once(|_, _| Ok(position("p-4", "Support", "#0EA5E9")));
        let state = http_state()
            .with_positions_command(command)
            .signed_in_as(identity("1", Role::Admin))
            .build();

        let (status, body) = send(
            state,
            test::TestRequest::post()
                .uri("/api/positions")
                .set_json(json!({"name": "Support", "color": "#0EA5E9"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "p-4");
    }

    #[rstest]
    #[actix_web::test]
    async fn update_targets_the_path_id() {
        let mut command = MockPositionsCommand::new();
        command
            .expect_update_position()
            .withf(|_, id, _| id.as_ref() == "2")
            .return_once(|_, _, _| Ok(position("2", "Engineer", "#000000")));
        let state = http_state()
            .with_positions_command(command)
            .signed_in_as(identity("1", Role::Admin))
            .build();

        let (status, body) = send(
            state,
            test::TestRequest::put()
                .uri("/api/positions/2")
                .set_json(json!({"name": "Engineer", "color": "#000000"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Engineer");
    }

    #[rstest]
    #[case(Ok(()), StatusCode::NO_CONTENT)]
    #[case(
        Err(Error::position_in_use("Position is in use by employees")),
        StatusCode::BAD_REQUEST
    )]
    #[case(Err(Error::not_found("position 3 not found")), StatusCode::NOT_FOUND)]
    #[case(Err(Error::forbidden("admin role required")), StatusCode::FORBIDDEN)]
    #[actix_web::test]
    async fn delete_maps_outcomes(
        #[case] outcome: Result<(), Error>,
        #[case] expected: StatusCode,
    ) {
        let mut command = MockPositionsCommand::new();
        command
            .expect_delete_position()
            .withf(|_, id| id.as_ref() == "3")
            .return_once(move |_, _| outcome);
        let state = http_state()
            .with_positions_command(command)
            .signed_in_as(identity("1", Role::Admin))
            .build();

        let (status, _) = send(state, test::TestRequest::delete().uri("/api/positions/3")).await;

        assert_eq!(status, expected);
    }
}

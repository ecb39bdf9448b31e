//! Shift scheduling handlers.
//!
//! ```text
//! GET    /api/shifts?start_date=2024-03-01&end_date=2024-03-31&userId=2
//! POST   /api/shifts {"userId":"2","date":"2024-03-01","startTime":"09:00","endTime":"17:00"}
//! PUT    /api/shifts/{id} (same body as POST)
//! DELETE /api/shifts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ShiftFields, ShiftFilterFields, ShiftId, ShiftView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthContext;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id};

const ID_FIELD: FieldName = FieldName::new("id");

/// Query parameters for `GET /api/shifts`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShiftListParams {
    /// Earliest date to include, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Latest date to include, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Restrict to one employee. Ignored for employees, who only see their own shifts.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl From<ShiftListParams> for ShiftFilterFields {
    fn from(value: ShiftListParams) -> Self {
        Self {
            start_date: value.start_date,
            end_date: value.end_date,
            user_id: value.user_id,
        }
    }
}

/// Request body for creating or replacing a shift.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    #[schema(example = "2")]
    pub user_id: Option<String>,
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    #[schema(example = "09:00")]
    pub start_time: Option<String>,
    #[schema(example = "17:00")]
    pub end_time: Option<String>,
    pub notes: Option<String>,
}

impl From<ShiftRequest> for ShiftFields {
    fn from(value: ShiftRequest) -> Self {
        Self {
            user_id: value.user_id,
            date: value.date,
            start_time: value.start_time,
            end_time: value.end_time,
            notes: value.notes,
        }
    }
}

/// List shifts joined with their owners, ordered by date then start time.
#[utoipa::path(
    get,
    path = "/api/shifts",
    params(ShiftListParams),
    responses(
        (status = 200, description = "Matching shifts", body = [ShiftView]),
        (status = 400, description = "Malformed filter", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["shifts"],
    operation_id = "listShifts"
)]
#[get("/shifts")]
pub async fn list_shifts(
    state: web::Data<HttpState>,
    auth: AuthContext,
    params: web::Query<ShiftListParams>,
) -> ApiResult<web::Json<Vec<ShiftView>>> {
    let shifts = state
        .shifts
        .list_shifts(auth.identity(), params.into_inner().into())
        .await?;
    Ok(web::Json(shifts))
}

/// Schedule a shift. Admins and managers only.
#[utoipa::path(
    post,
    path = "/api/shifts",
    request_body = ShiftRequest,
    responses(
        (status = 201, description = "Shift created", body = ShiftView),
        (status = 400, description = "Invalid shift or overlapping window", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["shifts"],
    operation_id = "createShift"
)]
#[post("/shifts")]
pub async fn create_shift(
    state: web::Data<HttpState>,
    auth: AuthContext,
    payload: web::Json<ShiftRequest>,
) -> ApiResult<HttpResponse> {
    let shift = state
        .shifts_command
        .create_shift(auth.identity(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(shift))
}

/// Replace every mutable field of a shift. Admins and managers only.
#[utoipa::path(
    put,
    path = "/api/shifts/{id}",
    params(("id" = String, Path, description = "Shift identifier")),
    request_body = ShiftRequest,
    responses(
        (status = 200, description = "Shift updated", body = ShiftView),
        (status = 400, description = "Invalid shift or overlapping window", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Shift or employee not found", body = ErrorSchema)
    ),
    tags = ["shifts"],
    operation_id = "updateShift"
)]
#[put("/shifts/{id}")]
pub async fn update_shift(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    payload: web::Json<ShiftRequest>,
) -> ApiResult<web::Json<ShiftView>> {
    let id = parse_path_id(path.into_inner(), ID_FIELD, ShiftId::new)?;
    let shift = state
        .shifts_command
        .update_shift(auth.identity(), &id, payload.into_inner().into())
        .await?;
    Ok(web::Json(shift))
}

/// Delete a shift. Admins and managers only.
#[utoipa::path(
    delete,
    path = "/api/shifts/{id}",
    params(("id" = String, Path, description = "Shift identifier")),
    responses(
        (status = 204, description = "Shift deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 404, description = "Shift not found", body = ErrorSchema)
    ),
    tags = ["shifts"],
    operation_id = "deleteShift"
)]
#[delete("/shifts/{id}")]
pub async fn delete_shift(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner(), ID_FIELD, ShiftId::new)?;
    state
        .shifts_command
        .delete_shift(auth.identity(), &id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "shifts_tests.rs"]
mod tests;

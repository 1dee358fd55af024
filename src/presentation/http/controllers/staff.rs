// src/presentation/http/controllers/staff.rs
use crate::application::{commands::staff::AssignStaffCommand, dto::StaffAssignmentDto};
use crate::domain::publisher::StaffRole;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignStaffRequest {
    pub user_id: i64,
    /// `editor` or `journalist`.
    #[schema(value_type = String)]
    pub role: StaffRole,
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers/{id}/staff",
    params(("id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 200, description = "Staff roster of the publisher.", body = [StaffAssignmentDto]),
        (status = 403, description = "Administrators only.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn list_staff(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(publisher_id): Path<i64>,
) -> HttpResult<Json<Vec<StaffAssignmentDto>>> {
    state
        .services
        .staff_commands
        .list(&user, publisher_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers/{id}/staff",
    params(("id" = i64, Path, description = "Publisher identifier")),
    request_body = AssignStaffRequest,
    responses(
        (status = 201, description = "Staff assignment stored.", body = StaffAssignmentDto),
        (status = 403, description = "Administrators only.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher or user not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn assign_staff(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(publisher_id): Path<i64>,
    Json(payload): Json<AssignStaffRequest>,
) -> HttpResult<(StatusCode, Json<StaffAssignmentDto>)> {
    let command = AssignStaffCommand {
        publisher_id,
        user_id: payload.user_id,
        role: payload.role,
    };
    let assignment = state
        .services
        .staff_commands
        .assign(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/staff/{id}",
    params(("id" = i64, Path, description = "Staff assignment identifier")),
    responses(
        (status = 204, description = "Assignment removed."),
        (status = 403, description = "Administrators only.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Assignment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn remove_staff(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .staff_commands
        .remove(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{Json, extract::State};
use database::services::staff::StaffService;

use crate::{
    dtos::{
        MessageResponse,
        staff::{CreateStaffRequest, CreatedStaffResponse, StaffWithUserResponse, UpdateStaffRequest},
    },
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/staff",
    responses(
        (status = 200, description = "All staff members", body = [StaffWithUserResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffWithUserResponse>>, ApiError> {
    let staff = StaffService::list(&state.db).await?;

    Ok(Json(staff.into_iter().map(Into::into).collect()))
}

/// Create a user with the staff role and its staff profile
#[utoipa::path(
    post,
    path = "/api/staff",
    request_body = CreateStaffRequest,
    responses(
        (status = 200, description = "Staff member created", body = CreatedStaffResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn create_staff(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateStaffRequest>,
) -> Result<Json<CreatedStaffResponse>, ApiError> {
    let (account, profile) = request.into_parts();
    let created = StaffService::create(&state.db, account, profile).await?;

    Ok(Json(created.into()))
}

#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    request_body = UpdateStaffRequest,
    responses(
        (status = 200, description = "Staff member updated", body = StaffWithUserResponse),
        (status = 404, description = "Staff not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn update_staff(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateStaffRequest>,
) -> Result<Json<StaffWithUserResponse>, ApiError> {
    let (changes, account) = request.into_parts();
    let updated = StaffService::update(&state.db, id, changes, account)
        .await?
        .ok_or(ApiError::NotFound("Staff"))?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member deleted", body = MessageResponse),
        (status = 404, description = "Staff not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !StaffService::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Staff"));
    }

    Ok(Json(MessageResponse::new("Staff deleted successfully")))
}

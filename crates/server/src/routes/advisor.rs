use axum::{Json, extract::State};
use database::services::{advisor::AdvisorService, student::StudentService};

use crate::{
    dtos::{
        MessageResponse,
        advisor::{
            AdvisorStudentsResponse, AdvisorWithUserResponse, CreateAdvisorRequest,
            CreatedAdvisorResponse, UpdateAdvisorRequest,
        },
        student::StudentWithEnrollmentsResponse,
    },
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// List every advisor with its user and advisees
#[utoipa::path(
    get,
    path = "/api/advisors",
    responses(
        (status = 200, description = "All advisors", body = [AdvisorStudentsResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Advisors"
)]
pub async fn list_advisors(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvisorStudentsResponse>>, ApiError> {
    let advisors = AdvisorService::list(&state.db).await?;

    Ok(Json(advisors.into_iter().map(Into::into).collect()))
}

/// List the students advised by an advisor
#[utoipa::path(
    get,
    path = "/api/advisors/{id}/students",
    params(
        ("id" = i32, Path, description = "Advisor ID")
    ),
    responses(
        (status = 200, description = "Advisees, possibly empty", body = [StudentWithEnrollmentsResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Advisors"
)]
pub async fn list_advisor_students(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Vec<StudentWithEnrollmentsResponse>>, ApiError> {
    let students = StudentService::list_by_advisor(&state.db, id).await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Create a user with the advisor role and its advisor profile
#[utoipa::path(
    post,
    path = "/api/advisors",
    request_body = CreateAdvisorRequest,
    responses(
        (status = 200, description = "Advisor created", body = CreatedAdvisorResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Advisors"
)]
pub async fn create_advisor(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateAdvisorRequest>,
) -> Result<Json<CreatedAdvisorResponse>, ApiError> {
    let (account, profile) = request.into_parts();
    let created = AdvisorService::create(&state.db, account, profile).await?;

    Ok(Json(created.into()))
}

#[utoipa::path(
    put,
    path = "/api/advisors/{id}",
    params(
        ("id" = i32, Path, description = "Advisor ID")
    ),
    request_body = UpdateAdvisorRequest,
    responses(
        (status = 200, description = "Advisor updated", body = AdvisorWithUserResponse),
        (status = 404, description = "Advisor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Advisors"
)]
pub async fn update_advisor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateAdvisorRequest>,
) -> Result<Json<AdvisorWithUserResponse>, ApiError> {
    let (changes, account) = request.into_parts();
    let updated = AdvisorService::update(&state.db, id, changes, account)
        .await?
        .ok_or(ApiError::NotFound("Advisor"))?;

    Ok(Json(updated.into()))
}

/// Delete an advisor with its owning user; advisees keep no advisor
#[utoipa::path(
    delete,
    path = "/api/advisors/{id}",
    params(
        ("id" = i32, Path, description = "Advisor ID")
    ),
    responses(
        (status = 200, description = "Advisor deleted", body = MessageResponse),
        (status = 404, description = "Advisor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Advisors"
)]
pub async fn delete_advisor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !AdvisorService::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Advisor"));
    }

    Ok(Json(MessageResponse::new("Advisor deleted successfully")))
}

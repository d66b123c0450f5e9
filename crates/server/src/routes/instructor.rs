use axum::{Json, extract::State};
use database::services::instructor::{InstructorDeletion, InstructorService};

use crate::{
    dtos::{
        MessageResponse,
        course::CourseRosterResponse,
        instructor::{
            CreateInstructorRequest, CreatedInstructorResponse, InstructorCoursesResponse,
            InstructorDetailResponse, InstructorWithUserResponse, TaughtStudentResponse,
            UpdateInstructorRequest,
        },
    },
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// List every instructor with its user and courses
#[utoipa::path(
    get,
    path = "/api/instructors",
    responses(
        (status = 200, description = "All instructors", body = [InstructorCoursesResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn list_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<InstructorCoursesResponse>>, ApiError> {
    let instructors = InstructorService::list(&state.db).await?;

    Ok(Json(instructors.into_iter().map(Into::into).collect()))
}

/// Get the instructor profile owned by a user, with full course rosters
#[utoipa::path(
    get,
    path = "/api/instructors/{id}",
    params(
        ("id" = i32, Path, description = "ID of the user owning the instructor profile")
    ),
    responses(
        (status = 200, description = "Instructor found", body = InstructorDetailResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<InstructorDetailResponse>, ApiError> {
    let record = InstructorService::find_by_user_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("Instructor"))?;

    Ok(Json(record.into()))
}

/// List the courses taught by an instructor, each with its roster
#[utoipa::path(
    get,
    path = "/api/instructors/{id}/courses",
    params(
        ("id" = i32, Path, description = "Instructor ID")
    ),
    responses(
        (status = 200, description = "Courses, possibly empty", body = [CourseRosterResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn list_instructor_courses(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Vec<CourseRosterResponse>>, ApiError> {
    let courses = InstructorService::courses_by_instructor(&state.db, id).await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// List every distinct student enrolled in any course of an instructor
#[utoipa::path(
    get,
    path = "/api/instructors/{id}/students",
    params(
        ("id" = i32, Path, description = "ID of the user owning the instructor profile")
    ),
    responses(
        (status = 200, description = "Students, one entry each", body = [TaughtStudentResponse]),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn list_instructor_students(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<Vec<TaughtStudentResponse>>, ApiError> {
    let students = InstructorService::students_of(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("Instructor"))?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Create a user with the instructor role and its instructor profile
#[utoipa::path(
    post,
    path = "/api/instructors",
    request_body = CreateInstructorRequest,
    responses(
        (status = 200, description = "Instructor created", body = CreatedInstructorResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateInstructorRequest>,
) -> Result<Json<CreatedInstructorResponse>, ApiError> {
    let (account, profile) = request.into_parts();
    let created = InstructorService::create(&state.db, account, profile).await?;

    Ok(Json(created.into()))
}

#[utoipa::path(
    put,
    path = "/api/instructors/{id}",
    params(
        ("id" = i32, Path, description = "Instructor ID")
    ),
    request_body = UpdateInstructorRequest,
    responses(
        (status = 200, description = "Instructor updated", body = InstructorWithUserResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateInstructorRequest>,
) -> Result<Json<InstructorWithUserResponse>, ApiError> {
    let (changes, account) = request.into_parts();
    let updated = InstructorService::update(&state.db, id, changes, account)
        .await?
        .ok_or(ApiError::NotFound("Instructor"))?;

    Ok(Json(updated.into()))
}

/// Delete an instructor with its owning user
///
/// Refused with a conflict while the instructor still teaches courses.
#[utoipa::path(
    delete,
    path = "/api/instructors/{id}",
    params(
        ("id" = i32, Path, description = "Instructor ID")
    ),
    responses(
        (status = 200, description = "Instructor deleted", body = MessageResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
        (status = 409, description = "Instructor still has courses", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    match InstructorService::delete(&state.db, id).await? {
        InstructorDeletion::Deleted => {
            Ok(Json(MessageResponse::new("Instructor deleted successfully")))
        }
        InstructorDeletion::NotFound => Err(ApiError::NotFound("Instructor")),
        InstructorDeletion::StillTeaching(_) => {
            Err(ApiError::Conflict("Foreign key constraint violated"))
        }
    }
}

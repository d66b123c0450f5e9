use axum::{Json, extract::State};
use database::services::course::CourseService;

use crate::{
    dtos::{
        MessageResponse,
        course::{
            CourseResponse, CourseWithInstructorResponse, CreateCourseRequest,
            UpdateCourseRequest, UpdatedCourseResponse,
        },
    },
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// List every course with its instructor
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses", body = [CourseWithInstructorResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithInstructorResponse>>, ApiError> {
    let courses = CourseService::list(&state.db).await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Unknown instructor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::create(&state.db, request.into()).await?;

    Ok(Json(course.into()))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = UpdatedCourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 409, description = "Unknown instructor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateCourseRequest>,
) -> Result<Json<UpdatedCourseResponse>, ApiError> {
    let updated = CourseService::update(&state.db, id, request.into())
        .await?
        .ok_or(ApiError::NotFound("Course"))?;

    Ok(Json(updated.into()))
}

/// Delete a course and, by cascade, its enrollments
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !CourseService::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Course"));
    }

    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

use axum::{Json, extract::State};
use database::services::student::StudentService;
use log::info;

use crate::{
    dtos::{
        MessageResponse,
        course::EnrollmentResponse,
        student::{
            CreateStudentRequest, CreatedStudentResponse, EnrollRequest, StudentListingResponse,
            StudentWithEnrollmentsResponse, StudentWithUserResponse, UpdateStudentRequest,
        },
    },
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// List every student with user, enrollments, and advisor
///
/// The `gpa` field is the stored value.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = [StudentListingResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentListingResponse>>, ApiError> {
    let students = StudentService::list(&state.db).await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Get the student profile owned by a user, with a freshly computed GPA
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "ID of the user owning the student profile")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentWithEnrollmentsResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<StudentWithEnrollmentsResponse>, ApiError> {
    let record = StudentService::find_by_user_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("Student"))?;

    Ok(Json(StudentWithEnrollmentsResponse::with_computed_gpa(record)))
}

/// Create a user with the student role and its student profile
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Student created", body = CreatedStudentResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Username taken or unknown advisor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateStudentRequest>,
) -> Result<Json<CreatedStudentResponse>, ApiError> {
    let (account, profile) = request.into_parts();
    let created = StudentService::create(&state.db, account, profile).await?;

    info!("Created student {} for user {}", created.1.id, created.0.id);

    Ok(Json(created.into()))
}

/// Update a student and its user in one transaction
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentWithUserResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Constraint violated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateStudentRequest>,
) -> Result<Json<StudentWithUserResponse>, ApiError> {
    let (changes, account) = request.into_parts();
    let updated = StudentService::update(&state.db, id, changes, account)
        .await?
        .ok_or(ApiError::NotFound("Student"))?;

    Ok(Json(updated.into()))
}

/// Delete a student together with its owning user
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !StudentService::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Student"));
    }

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/api/students/{id}/courses",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Enrollment created", body = EnrollmentResponse),
        (status = 409, description = "Already enrolled, or unknown student or course", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn enroll(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<EnrollRequest>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let enrollment = StudentService::enroll(&state.db, id, request.course_id).await?;

    Ok(Json(enrollment.into()))
}

/// Remove a student's enrollment in a course
#[utoipa::path(
    delete,
    path = "/api/students/{id}/courses/{courseId}",
    params(
        ("id" = i32, Path, description = "Student ID"),
        ("courseId" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollment deleted", body = MessageResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn unenroll(
    State(state): State<AppState>,
    ApiPath((id, course_id)): ApiPath<(i32, i32)>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !StudentService::unenroll(&state.db, id, course_id).await? {
        return Err(ApiError::NotFound("Enrollment"));
    }

    Ok(Json(MessageResponse::new("Enrollment deleted successfully")))
}

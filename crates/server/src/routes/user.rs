use axum::{Json, extract::State};
use database::services::user::UserService;

use crate::{
    dtos::{
        MessageResponse,
        user::{
            CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse, UserSummary,
        },
    },
    error::{ApiError, ErrorResponse},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

/// List every user
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserSummary]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = UserService::list(&state.db).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Get a user with all of its sub-profiles
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserProfileResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = UserService::get_profile(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(profile.into()))
}

/// Create a bare user without a sub-profile
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::create(&state.db, request.account.into(), request.role).await?;

    Ok(Json(user.into()))
}

/// Update any subset of a user's fields
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::update(&state.db, id, request.into())
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.into()))
}

/// Delete a user and, by cascade, its sub-profile
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !UserService::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("User"));
    }

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

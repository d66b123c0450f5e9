use axum::{Json, extract::State};
use database::services::user::UserService;
use log::info;

use crate::{
    dtos::user::{LoginRequest, UserSummary},
    error::{ApiError, ErrorResponse},
    extract::ApiJson,
    state::AppState,
};

/// Checks a username and password and returns the matching user
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserSummary),
        (status = 401, description = "Unknown user or wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<UserSummary>, ApiError> {
    let user = UserService::authenticate(&state.db, &request.username, &request.password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    info!("User {} logged in", user.id);

    Ok(Json(user.into()))
}

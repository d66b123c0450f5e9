/// Liveness probe; does not touch the database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> &'static str {
    "OK"
}

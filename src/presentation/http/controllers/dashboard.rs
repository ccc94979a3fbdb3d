// src/presentation/http/controllers/dashboard.rs
use crate::application::dto::DashboardDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Content and audience counts.", body = DashboardDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn stats(Extension(state): Extension<HttpState>) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard_queries
        .stats()
        .await
        .into_http()
        .map(Json)
}

// src/presentation/http/controllers/taxonomy.rs
use crate::application::{
    commands::taxonomy::{
        CreateCategoryCommand, CreateTagCommand, RenameTagCommand, UpdateCategoryCommand,
    },
    dto::{CategoryDto, TagDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    /// A new name also regenerates the slug.
    pub name: Option<String>,
    /// An empty string clears the description.
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "All categories by name.", body = [CategoryDto])),
    tag = "Taxonomy"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .taxonomy_queries
        .get_category_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    state
        .services
        .taxonomy_commands
        .create_category(CreateCategoryCommand {
            name: payload.name,
            description: payload.description,
        })
        .await
        .into_http()
        .map(|category| (StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .taxonomy_commands
        .update_category(UpdateCategoryCommand {
            id,
            name: payload.name,
            description: payload.description,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category deleted; its posts become uncategorised.", body = StatusResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .taxonomy_commands
        .delete_category(id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses((status = 200, description = "All tags by name.", body = [TagDto])),
    tag = "Taxonomy"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .taxonomy_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/by-slug/{slug}",
    params(("slug" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "The tag.", body = TagDto),
        (status = 404, description = "Tag not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn get_tag_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .taxonomy_queries
        .get_tag_by_slug(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = TagRequest,
    responses(
        (status = 201, description = "Tag created.", body = TagDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TagRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    state
        .services
        .taxonomy_commands
        .create_tag(CreateTagCommand { name: payload.name })
        .await
        .into_http()
        .map(|tag| (StatusCode::CREATED, Json(tag)))
}

#[utoipa::path(
    put,
    path = "/api/v1/tags/{id}",
    params(("id" = i64, Path, description = "Tag identifier")),
    request_body = TagRequest,
    responses(
        (status = 200, description = "Tag renamed.", body = TagDto),
        (status = 404, description = "Tag not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn rename_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<TagRequest>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .taxonomy_commands
        .rename_tag(RenameTagCommand {
            id,
            name: payload.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/tags/{id}",
    params(("id" = i64, Path, description = "Tag identifier")),
    responses(
        (status = 200, description = "Tag deleted and detached from posts.", body = StatusResponse),
        (status = 404, description = "Tag not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .taxonomy_commands
        .delete_tag(id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

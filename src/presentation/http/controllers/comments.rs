// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::SubmitCommentCommand,
    dto::{CommentDto, CommentNodeDto},
    queries::comments::ListThreadQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ThreadParams {
    /// Include comments still awaiting moderation.
    #[serde(default)]
    pub include_pending: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitCommentRequest {
    pub parent_id: Option<i64>,
    pub author_name: String,
    pub author_email: String,
    pub body: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier"), ThreadParams),
    responses(
        (status = 200, description = "Comment forest, oldest first.", body = [CommentNodeDto]),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_thread(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<i64>,
    Query(params): Query<ThreadParams>,
) -> HttpResult<Json<Vec<CommentNodeDto>>> {
    state
        .services
        .comment_queries
        .list_thread(ListThreadQuery {
            post_id,
            include_pending: params.include_pending,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = SubmitCommentRequest,
    responses(
        (status = 201, description = "Comment queued for moderation.", body = CommentDto),
        (status = 400, description = "Invalid input or parent on another post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post missing or not published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<i64>,
    Json(payload): Json<SubmitCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = SubmitCommentCommand {
        post_id,
        parent_id: payload.parent_id,
        author_name: payload.author_name,
        author_email: payload.author_email,
        body: payload.body,
    };

    state
        .services
        .comment_commands
        .submit_comment(command)
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/pending",
    responses((status = 200, description = "Moderation queue, oldest first.", body = [CommentDto])),
    tag = "Comments"
)]
pub async fn list_pending(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_pending()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/approve",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment approved.", body = CommentDto),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn approve_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .approve_comment(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment and its replies deleted.", body = StatusResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .comment_commands
        .delete_comment(id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

// src/presentation/http/openapi.rs
use crate::application::dto::{Page, PostDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostListResponse {
    pub items: Vec<PostDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

impl From<Page<PostDto>> for PostListResponse {
    fn from(page: Page<PostDto>) -> Self {
        let has_more = page.has_more();
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::set_publish_state,
        crate::presentation::http::controllers::comments::list_thread,
        crate::presentation::http::controllers::comments::submit_comment,
        crate::presentation::http::controllers::comments::list_pending,
        crate::presentation::http::controllers::comments::approve_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::taxonomy::list_categories,
        crate::presentation::http::controllers::taxonomy::get_category_by_slug,
        crate::presentation::http::controllers::taxonomy::create_category,
        crate::presentation::http::controllers::taxonomy::update_category,
        crate::presentation::http::controllers::taxonomy::delete_category,
        crate::presentation::http::controllers::taxonomy::list_tags,
        crate::presentation::http::controllers::taxonomy::get_tag_by_slug,
        crate::presentation::http::controllers::taxonomy::create_tag,
        crate::presentation::http::controllers::taxonomy::rename_tag,
        crate::presentation::http::controllers::taxonomy::delete_tag,
        crate::presentation::http::controllers::newsletter::subscribe,
        crate::presentation::http::controllers::newsletter::unsubscribe,
        crate::presentation::http::controllers::newsletter::list_subscribers,
        crate::presentation::http::controllers::dashboard::stats,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            PostListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::PublishRequest,
            crate::presentation::http::controllers::comments::SubmitCommentRequest,
            crate::presentation::http::controllers::taxonomy::CreateCategoryRequest,
            crate::presentation::http::controllers::taxonomy::UpdateCategoryRequest,
            crate::presentation::http::controllers::taxonomy::TagRequest,
            crate::presentation::http::controllers::newsletter::SubscribeRequest,
            crate::presentation::http::controllers::newsletter::UnsubscribeRequest,
            crate::application::dto::PostDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::TagDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentNodeDto,
            crate::application::dto::SubscriberDto,
            crate::application::dto::DashboardDto
        )
    ),
    tags(
        (name = "Posts", description = "Post authoring and lookup"),
        (name = "Comments", description = "Threaded comments and moderation"),
        (name = "Taxonomy", description = "Categories and tags"),
        (name = "Newsletter", description = "Newsletter subscriptions"),
        (name = "Dashboard", description = "Aggregate counts"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Quill API",
        description = "Blogging backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        for url in urls {
            if !servers.iter().any(|server| server.url == url) {
                servers.push(Server::new(url));
            }
        }
        if servers.is_empty() {
            servers.push(Server::new("/"));
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/redoc") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

// src/presentation/http/controllers/newsletter.rs
use crate::application::{
    commands::newsletter::{SubscribeCommand, UnsubscribeCommand},
    dto::SubscriberDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnsubscribeRequest {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletter/subscribe",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Address is subscribed.", body = SubscriberDto),
        (status = 400, description = "Malformed address.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<Json<SubscriberDto>> {
    state
        .services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: payload.email,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletter/unsubscribe",
    request_body = UnsubscribeRequest,
    responses(
        (status = 200, description = "Address is unsubscribed.", body = SubscriberDto),
        (status = 404, description = "Unknown token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn unsubscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UnsubscribeRequest>,
) -> HttpResult<Json<SubscriberDto>> {
    state
        .services
        .newsletter_commands
        .unsubscribe(UnsubscribeCommand {
            token: payload.token,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/newsletter/subscribers",
    responses((status = 200, description = "Active subscribers.", body = [SubscriberDto])),
    tag = "Newsletter"
)]
pub async fn list_subscribers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SubscriberDto>>> {
    state
        .services
        .newsletter_queries
        .list_active_subscribers()
        .await
        .into_http()
        .map(Json)
}

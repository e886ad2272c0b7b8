//! The HTTP echo resource.
//!
//! One resource mounted at `/assignments` and `/assignments/{id}`. Handlers
//! echo request bodies back; nothing is persisted through the database
//! helpers yet.

use axum::extract::{Json, Path};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiMessage {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }

    fn with_data(message: &str, data: Value) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}

#[must_use]
pub fn app() -> Router {
    Router::new()
        .route(
            "/assignments",
            get(get_status)
                .post(post_echo)
                .put(put_echo)
                .delete(delete_ack),
        )
        .route(
            "/assignments/{id}",
            get(get_status_by_id)
                .post(post_echo_by_id)
                .put(put_echo_by_id)
                .delete(delete_ack_by_id),
        )
}

async fn get_status() -> Json<ApiMessage> {
    Json(ApiMessage::new("Server is running"))
}

async fn post_echo(Json(data): Json<Value>) -> Json<ApiMessage> {
    Json(ApiMessage::with_data("Data received", data))
}

async fn put_echo(Json(data): Json<Value>) -> Json<ApiMessage> {
    Json(ApiMessage::with_data("Server configuration updated", data))
}

async fn delete_ack() -> Json<ApiMessage> {
    Json(ApiMessage::new("Server deleted"))
}

async fn get_status_by_id(Path(id): Path<i64>) -> Json<ApiMessage> {
    tracing::debug!(id, "status requested");
    get_status().await
}

async fn post_echo_by_id(Path(id): Path<i64>, body: Json<Value>) -> Json<ApiMessage> {
    tracing::debug!(id, "data received");
    post_echo(body).await
}

async fn put_echo_by_id(Path(id): Path<i64>, body: Json<Value>) -> Json<ApiMessage> {
    tracing::debug!(id, "configuration update");
    put_echo(body).await
}

async fn delete_ack_by_id(Path(id): Path<i64>) -> Json<ApiMessage> {
    tracing::debug!(id, "delete requested");
    delete_ack().await
}

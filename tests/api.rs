use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use todo_backend::api::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn get_reports_server_running() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/assignments")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Server is running");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn post_echoes_the_body() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/assignments",
            r#"{"title":"buy milk","done":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Data received");
    assert_eq!(body["data"]["title"], "buy milk");
    assert_eq!(body["data"]["done"], false);
}

#[tokio::test]
async fn put_echoes_the_body() {
    let resp = app()
        .oneshot(json_request("PUT", "/assignments", r#"{"debug":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Server configuration updated");
    assert_eq!(body["data"]["debug"], true);
}

#[tokio::test]
async fn delete_acknowledges() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/assignments")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Server deleted");
}

#[tokio::test]
async fn id_route_answers_too() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/assignments/42")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn id_route_echoes_post_body() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/assignments/7",
            r#"{"title":"reassigned"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Data received");
    assert_eq!(body["data"]["title"], "reassigned");
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/assignments/not-a-number")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

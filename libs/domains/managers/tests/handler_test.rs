//! Handler tests for the Managers domain.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_managers::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let auth = JwtAuth::new(&JwtConfig::new("managers-handler-test-secret-0123456").unwrap());
    handlers::router(ManagerService::new(InMemoryManagerRepository::new()), auth)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_partial_update_keeps_type() {
    let app = app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/public",
            json!({ "name": "Manager A", "type": "agronomist" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/public/1", json!({ "name": "Manager B" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/public/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Manager B");
    assert_eq!(body["type"], "agronomist");
}

#[tokio::test]
async fn test_update_unknown_manager_is_404() {
    let response = app()
        .oneshot(json_request("PUT", "/public/5", json!({ "name": "Nobody" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/public")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

//! Handler tests for the Lots domain, wired to a real in-memory crop catalog.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_crops::{Crop, CropService, InMemoryCropRepository};
use domain_lots::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn app() -> Router {
    let crops = CropService::new(InMemoryCropRepository::new());
    for name in ["Wheat", "Corn"] {
        crops
            .create_crop(Crop {
                id: 0,
                name: name.into(),
            })
            .await
            .unwrap();
    }

    let auth = JwtAuth::new(&JwtConfig::new("lots-handler-test-secret-0123456789").unwrap());
    handlers::router(
        LotService::new(InMemoryLotRepository::new(), Arc::new(crops)),
        auth,
    )
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_lot(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/public")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_get_returns_embedded_crops() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(post_lot(json!({
            "name": "Lot A",
            "hectares": 10.0,
            "season": "2025",
            "field_id": 1,
            "previous_crop_id": 1,
            "current_crop_id": 2
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response.into_body()).await["id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/public/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["previous_crop"]["name"], "Wheat");
    assert_eq!(body["current_crop"]["name"], "Corn");
    assert_eq!(body["hectares"], 10.0);
}

#[tokio::test]
async fn test_unknown_crop_surfaces_as_404_on_read() {
    let app = app().await;
    app.clone()
        .oneshot(post_lot(json!({
            "name": "Lot B",
            "hectares": 3.5,
            "field_id": 1,
            "previous_crop_id": 1,
            "current_crop_id": 42
        })))
        .await
        .unwrap();

    let response = app.oneshot(get("/public")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("fetch current crop 42"));
}

#[tokio::test]
async fn test_negative_hectares_is_400() {
    let response = app()
        .await
        .oneshot(post_lot(json!({
            "name": "Lot C",
            "hectares": -2.0,
            "field_id": 1,
            "previous_crop_id": 1,
            "current_crop_id": 2
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

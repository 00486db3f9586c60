//! Handler tests for the Fields domain over the real lot and crop services.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_crops::{Crop, CropService, InMemoryCropRepository};
use domain_fields::*;
use domain_lots::{InMemoryLotRepository, LotService};
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
    let lots = LotService::new(InMemoryLotRepository::new(), Arc::new(crops));

    let auth = JwtAuth::new(&JwtConfig::new("fields-handler-test-secret-012345678").unwrap());
    handlers::router(
        FieldService::new(InMemoryFieldRepository::new(), Arc::new(lots)),
        auth,
    )
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_field(body: Value) -> Request<Body> {
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

fn lot(name: &str) -> Value {
    json!({
        "name": name,
        "hectares": 10.0,
        "season": "2025",
        "previous_crop_id": 1,
        "current_crop_id": 2
    })
}

#[tokio::test]
async fn test_nested_lots_are_returned_with_crops() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(post_field(json!({
            "name": "Field A",
            "lease_type_id": 1,
            "lots": [lot("Lot A"), lot("Lot B")]
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response.into_body()).await["id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/public/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let lots = body["lots"].as_array().unwrap();
    assert_eq!(lots.len(), 2);
    assert_eq!(lots[0]["name"], "Lot A");
    assert_eq!(lots[0]["field_id"], id);
    assert_eq!(lots[1]["current_crop"]["name"], "Corn");
}

#[tokio::test]
async fn test_lots_stay_with_their_own_field() {
    let app = app().await;
    for (name, lot_name) in [("North", "N1"), ("South", "S1")] {
        app.clone()
            .oneshot(post_field(json!({
                "name": name,
                "lease_type_id": 2,
                "lots": [lot(lot_name)]
            })))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/public")).await.unwrap();
    let body = json_body(response.into_body()).await;
    let fields = body.as_array().unwrap();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["lots"][0]["name"], "N1");
    assert_eq!(fields[1]["lots"][0]["name"], "S1");
    assert_eq!(fields[1]["lots"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_nested_lot_is_400() {
    let mut bad = lot("Lot A");
    bad["hectares"] = json!(0.0);

    let response = app()
        .await
        .oneshot(post_field(json!({
            "name": "Field A",
            "lease_type_id": 1,
            "lots": [bad]
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_field_is_404() {
    let response = app().await.oneshot(get("/public/77")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

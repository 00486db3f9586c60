//! Handler tests for the Investors domain.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_investors::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let auth = JwtAuth::new(&JwtConfig::new("investors-handler-test-secret-01234").unwrap());
    handlers::router(InvestorService::new(InMemoryInvestorRepository::new()), auth)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/public")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_and_read_date_as_iso_string() {
    let app = app();
    let response = app
        .clone()
        .oneshot(create(json!({
            "name": "Investor A",
            "contributions": 15000.0,
            "contribution_date": "2025-03-01",
            "percentage": 25
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/public/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["contribution_date"], "2025-03-01");
    assert_eq!(body["percentage"], 25);
}

#[tokio::test]
async fn test_percentage_out_of_range_is_400() {
    let response = app()
        .oneshot(create(json!({ "name": "Investor A", "percentage": 101 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

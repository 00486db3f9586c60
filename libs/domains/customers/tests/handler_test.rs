//! Handler tests for the Customers domain.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_customers::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

/// Prefix match over a fixed list.
struct StaticSuggester(Vec<&'static str>);

#[async_trait]
impl Suggester for StaticSuggester {
    async fn suggest(&self, query: &str) -> CustomerResult<Vec<Suggestion>> {
        Ok(self
            .0
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with(query))
            .map(|(i, name)| Suggestion {
                id: i as i64 + 1,
                text: name.to_string(),
            })
            .collect())
    }
}

fn auth() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new("customers-handler-test-secret-012345").unwrap())
}

fn app() -> Router {
    let service = CustomerService::new(InMemoryCustomerRepository::new()).with_suggester(
        Arc::new(StaticSuggester(vec!["Client A", "Client B", "Other"])),
    );
    handlers::router(service, auth())
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_reads_type_field() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/public")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "name": "Client A", "type": "company" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/public/1")).await.unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "id": 1, "name": "Client A", "type": "company" }));
}

#[tokio::test]
async fn test_list_is_insertion_ordered() {
    let app = app();
    for name in ["Client A", "Client B"] {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/public")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "name": name }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/public")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let customers: Vec<Customer> = json_body(response.into_body()).await;
    let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Client A", "Client B"]);
}

#[tokio::test]
async fn test_suggest_returns_names_only() {
    let response = app().oneshot(get("/public/suggest?q=Client")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let names: Vec<String> = json_body(response.into_body()).await;
    assert_eq!(names, vec!["Client A", "Client B"]);
}

#[tokio::test]
async fn test_protected_ping_with_token() {
    let auth = auth();
    let token = auth.create_access_token("user-1", &["admin".to_string()]).unwrap();
    let app = handlers::router(
        CustomerService::new(InMemoryCustomerRepository::new()),
        auth,
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/protected/ping")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

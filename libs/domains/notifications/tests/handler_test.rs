//! Handler tests for the Notifications domain.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_notifications::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Keeps every email instead of delivering it; fails when `down`.
#[derive(Clone, Default)]
struct Outbox {
    sent: Arc<Mutex<Vec<Email>>>,
    down: bool,
}

#[async_trait]
impl EmailProvider for Outbox {
    async fn send(&self, email: &Email) -> NotificationResult<SentEmail> {
        if self.down {
            return Err(NotificationError::Provider("connection refused".into()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(SentEmail::default())
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}

fn app(outbox: Outbox) -> Router {
    let auth = JwtAuth::new(&JwtConfig::new("notifications-handler-test-secret-01").unwrap());
    handlers::router(NotificationService::new(outbox), auth)
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_email_is_handed_to_provider() {
    let outbox = Outbox::default();
    let response = app(outbox.clone())
        .oneshot(json_request(
            "/public/email",
            json!({
                "address": "ana@campo.example",
                "subject": "Campaign 2025 closed",
                "body_template": "<p>Closed</p>"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "sent");

    let sent = outbox.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, "<p>Closed</p>");
}

#[tokio::test]
async fn test_verification_without_token_is_400() {
    let outbox = Outbox::default();
    let response = app(outbox.clone())
        .oneshot(json_request(
            "/public/verification",
            json!({ "email": "ana@campo.example", "token": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(outbox.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_provider_is_503() {
    let outbox = Outbox {
        down: true,
        ..Default::default()
    };
    let response = app(outbox)
        .oneshot(json_request(
            "/public/verification",
            json!({ "email": "ana@campo.example", "token": "481516" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

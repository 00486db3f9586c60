use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::AppError;
use axum::{
    Extension, Json, Router,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use serde_json::{Value, json};

/// Bearer token from `Authorization`, falling back to the `access_token` cookie.
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .or_else(|| {
            headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let (name, value) = cookie.trim().split_once('=')?;
                        (name == "access_token").then(|| value.to_string())
                    })
                })
        })
}

/// Rejects the request with 401 unless it carries a valid token.
///
/// On success the decoded [`JwtClaims`] are inserted into the request extensions.
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_token_from_request(&headers) else {
        tracing::debug!("No JWT found in Authorization header or cookie");
        return Err(AppError::Unauthorized("No token provided".to_string()));
    };

    let claims = auth.verify_token(&token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

async fn ping(Extension(claims): Extension<JwtClaims>) -> Json<Value> {
    Json(json!({ "message": "pong", "subject": claims.sub }))
}

/// The `/protected` route group shared by every entity: `GET /ping` behind the JWT check.
pub fn protected_router(auth: JwtAuth) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .layer(middleware::from_fn_with_state(auth, jwt_auth_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use axum::{body::Body, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("ponti-test-secret-that-is-long-enough").unwrap())
    }

    fn ping_request(header: Option<(&str, String)>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/ping");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let response = protected_router(auth())
            .oneshot(ping_request(None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let response = protected_router(auth())
            .oneshot(ping_request(Some((
                "authorization",
                "Bearer not-a-token".to_string(),
            ))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bearer_token_reaches_handler() {
        let auth = auth();
        let token = auth.create_access_token("user-9", &[]).unwrap();

        let response = protected_router(auth)
            .oneshot(ping_request(Some(("authorization", format!("Bearer {token}")))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["subject"], "user-9");
    }

    #[test]
    fn test_cookie_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; access_token=abc.def.ghi".parse().unwrap(),
        );
        assert_eq!(
            extract_token_from_request(&headers).as_deref(),
            Some("abc.def.ghi")
        );
    }
}

//! # Axum Helpers
//!
//! Shared HTTP plumbing for the ponti services.
//!
//! - **[`errors`]**: `AppError` with structured `{code, error, message, details}` bodies
//! - **[`extractors`]**: `IdPath` (numeric ids) and `ValidatedJson`
//! - **[`auth`]**: stateless JWT and the `/protected` route group
//! - **[`http`]**: success bodies (`CreatedResponse`, `MessageResponse`)
//! - **[`server`]**: router assembly, health checks, graceful shutdown

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    ACCESS_TOKEN_TTL, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware, protected_router,
};

pub use server::{
    CorsConfig, HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};

pub use http::{CreatedResponse, MessageResponse};

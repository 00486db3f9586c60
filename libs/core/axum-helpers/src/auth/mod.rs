//! Stateless JWT authentication for the `/protected` route groups.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, protected_router};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//! let routes = Router::new().nest("/protected", protected_router(auth));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims};
pub use middleware::{jwt_auth_middleware, protected_router};

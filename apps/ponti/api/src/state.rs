//! Shared application state handed to the route builders.

use axum_helpers::JwtAuth;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool shared by every repository
    pub db: database::postgres::DatabaseConnection,
    pub jwt_auth: JwtAuth,
}

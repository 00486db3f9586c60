use std::sync::Arc;

use axum::Router;
use domain_fields::{FieldService, PgFieldRepository, handlers};

pub fn service(state: &crate::state::AppState) -> FieldService<PgFieldRepository> {
    FieldService::new(
        PgFieldRepository::new(state.db.clone()),
        Arc::new(super::lots::service(state)),
    )
}

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(service(state), state.jwt_auth.clone())
}

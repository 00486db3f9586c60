use std::sync::Arc;

use axum::Router;
use domain_lots::{LotService, PgLotRepository, handlers};

/// Lot service resolving its crops through the crops domain.
pub fn service(state: &crate::state::AppState) -> LotService<PgLotRepository> {
    LotService::new(
        PgLotRepository::new(state.db.clone()),
        Arc::new(super::crops::service(state)),
    )
}

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(service(state), state.jwt_auth.clone())
}

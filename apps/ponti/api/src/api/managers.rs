use axum::Router;
use domain_managers::{ManagerService, PgManagerRepository, handlers};

pub fn service(state: &crate::state::AppState) -> ManagerService<PgManagerRepository> {
    ManagerService::new(PgManagerRepository::new(state.db.clone()))
}

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(service(state), state.jwt_auth.clone())
}

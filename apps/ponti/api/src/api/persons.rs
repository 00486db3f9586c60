use axum::Router;
use domain_persons::{PersonService, PgPersonRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = PersonService::new(PgPersonRepository::new(state.db.clone()));
    handlers::router(service, state.jwt_auth.clone())
}

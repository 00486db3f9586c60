use axum::Router;
use domain_investors::{InvestorService, PgInvestorRepository, handlers};

pub fn service(state: &crate::state::AppState) -> InvestorService<PgInvestorRepository> {
    InvestorService::new(PgInvestorRepository::new(state.db.clone()))
}

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(service(state), state.jwt_auth.clone())
}

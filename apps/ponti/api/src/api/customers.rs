use std::sync::Arc;

use axum::Router;
use core_config::ConfigError;
use domain_customers::{CustomerService, PgCustomerRepository, PgTrgmSuggester, handlers};

pub fn service(state: &crate::state::AppState) -> CustomerService<PgCustomerRepository> {
    CustomerService::new(PgCustomerRepository::new(state.db.clone()))
}

/// Customer routes, with trigram suggestions on `/public/suggest`.
pub fn router(state: &crate::state::AppState) -> Result<Router, ConfigError> {
    let suggester = PgTrgmSuggester::new(state.db.clone(), state.config.suggester.clone())?;
    let service = service(state).with_suggester(Arc::new(suggester));
    Ok(handlers::router(service, state.jwt_auth.clone()))
}

use axum::Router;

pub mod crops;
pub mod customers;
pub mod fields;
pub mod health;
pub mod investors;
pub mod lots;
pub mod managers;
pub mod notifications;
pub mod persons;
pub mod projects;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Every domain is mounted at `/{api_version}/{tag}` and exposes its CRUD routes
/// under `/public` and a JWT-guarded `/protected` subtree.
pub fn routes(state: &crate::state::AppState) -> eyre::Result<Router> {
    let version = &state.config.server.api_version;
    let path = |tag: &str| format!("/{version}/{tag}");

    Ok(Router::new()
        .nest(
            &path(domain_customers::entity::Model::TAG),
            customers::router(state)?,
        )
        .nest(
            &path(domain_managers::entity::Model::TAG),
            managers::router(state),
        )
        .nest(
            &path(domain_investors::entity::Model::TAG),
            investors::router(state),
        )
        .nest(&path(domain_crops::entity::Model::TAG), crops::router(state))
        .nest(&path(domain_lots::entity::Model::TAG), lots::router(state))
        .nest(&path(domain_fields::entity::Model::TAG), fields::router(state))
        .nest(
            &path(domain_projects::entity::Model::TAG),
            projects::router(state),
        )
        .nest(&path(domain_persons::entity::Model::TAG), persons::router(state))
        .nest(&path(domain_users::entity::Model::TAG), users::router(state))
        .nest(
            &path(domain_notifications::TAG),
            notifications::router(state)?,
        ))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

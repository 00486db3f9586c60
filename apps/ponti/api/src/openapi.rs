use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Ponti API",
        version = "0.1.0",
        description = "Agricultural projects: parties, agronomy, projects and notifications"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/customers/public", api = domain_customers::handlers::ApiDoc),
        (path = "/v1/managers/public", api = domain_managers::handlers::ApiDoc),
        (path = "/v1/investors/public", api = domain_investors::handlers::ApiDoc),
        (path = "/v1/crops/public", api = domain_crops::handlers::ApiDoc),
        (path = "/v1/lots/public", api = domain_lots::handlers::ApiDoc),
        (path = "/v1/fields/public", api = domain_fields::handlers::ApiDoc),
        (path = "/v1/projects/public", api = domain_projects::handlers::ApiDoc),
        (path = "/v1/persons/public", api = domain_persons::handlers::ApiDoc),
        (path = "/v1/users/public", api = domain_users::handlers::ApiDoc),
        (path = "/v1/notifications/public", api = domain_notifications::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

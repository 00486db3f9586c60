use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::{
    CreatedResponse, IdPath, JwtAuth, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    protected_router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, SuggestQuery, UpdateCustomer};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

/// OpenAPI documentation for the Customers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_customers,
        create_customer,
        suggest_customers,
        get_customer,
        update_customer,
        delete_customer
    ),
    components(
        schemas(Customer, CreateCustomer, UpdateCustomer, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            ConflictResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Customer management")
    )
)]
pub struct ApiDoc;

pub fn router<R: CustomerRepository + 'static>(
    service: CustomerService<R>,
    auth: JwtAuth,
) -> Router {
    let public = Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/suggest", get(suggest_customers))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(Arc::new(service));

    Router::new()
        .nest("/public", public)
        .nest("/protected", protected_router(auth))
}

#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
) -> CustomerResult<Json<Vec<Customer>>> {
    Ok(Json(service.list_customers().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> CustomerResult<CreatedResponse> {
    let id = service.create_customer(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

/// Customer names similar to `q` (trigram match)
#[utoipa::path(
    get,
    path = "/suggest",
    tag = entity::Model::TAG,
    params(SuggestQuery),
    responses(
        (status = 200, description = "Matching names, best first", body = Vec<String>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn suggest_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    Query(query): Query<SuggestQuery>,
) -> CustomerResult<Json<Vec<String>>> {
    Ok(Json(service.suggest_names(&query.q).await?))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    IdPath(id): IdPath,
) -> CustomerResult<Json<Customer>> {
    Ok(Json(service.get_customer(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> CustomerResult<MessageResponse> {
    service.update_customer(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    IdPath(id): IdPath,
) -> CustomerResult<MessageResponse> {
    service.delete_customer(id).await?;
    Ok(MessageResponse::deleted())
}

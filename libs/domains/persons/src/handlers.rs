use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    CreatedResponse, IdPath, JwtAuth, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    protected_router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::PersonResult;
use crate::models::{CreatePerson, Person, UpdatePerson};
use crate::repository::PersonRepository;
use crate::service::PersonService;

/// OpenAPI documentation for the Persons API
#[derive(OpenApi)]
#[openapi(
    paths(list_persons, create_person, get_person, update_person, delete_person),
    components(
        schemas(Person, CreatePerson, UpdatePerson, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "People and their contact details")
    )
)]
pub struct ApiDoc;

pub fn router<R: PersonRepository + 'static>(service: PersonService<R>, auth: JwtAuth) -> Router {
    let public = Router::new()
        .route("/", get(list_persons).post(create_person))
        .route(
            "/{id}",
            get(get_person).put(update_person).delete(delete_person),
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
        (status = 200, description = "All persons", body = Vec<Person>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_persons<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
) -> PersonResult<Json<Vec<Person>>> {
    Ok(Json(service.list_persons().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePerson>,
) -> PersonResult<CreatedResponse> {
    let id = service.create_person(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    IdPath(id): IdPath,
) -> PersonResult<Json<Person>> {
    Ok(Json(service.get_person(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Person ID")),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdatePerson>,
) -> PersonResult<MessageResponse> {
    service.update_person(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    IdPath(id): IdPath,
) -> PersonResult<MessageResponse> {
    service.delete_person(id).await?;
    Ok(MessageResponse::deleted())
}

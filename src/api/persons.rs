//! Person management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::person::{CreatePerson, Person, UpdatePerson},
};

use super::{ApiJson, MessageResponse};

/// List all persons
#[utoipa::path(
    get,
    path = "/persons",
    tag = "persons",
    responses(
        (status = 200, description = "List of persons", body = Vec<Person>),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_persons(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Person>>> {
    let persons = state.services.persons.list().await?;
    Ok(Json(persons))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person details", body = Person),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.get_by_id(id).await?;
    Ok(Json(person))
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/persons",
    tag = "persons",
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Missing required field or duplicate email")
    )
)]
pub async fn create_person(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = state.services.persons.create(data).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Update a person (partial merge of the supplied fields)
#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 400, description = "Invalid field"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn update_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ApiJson(data): ApiJson<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.update(id, data).await?;
    Ok(Json(person))
}

/// Delete a person, blocked while any borrowing references it
#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = Uuid, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted", body = MessageResponse),
        (status = 400, description = "Person is referenced by a borrowing"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn delete_person(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.persons.delete(id).await?;
    Ok(Json(MessageResponse::new("Person deleted successfully")))
}

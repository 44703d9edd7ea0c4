//! Material management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::material::{CreateMaterial, Material, UpdateMaterial},
};

use super::{ApiJson, MessageResponse};

/// List all materials
#[utoipa::path(
    get,
    path = "/materials",
    tag = "materials",
    responses(
        (status = 200, description = "List of materials", body = Vec<Material>),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_materials(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Material>>> {
    let materials = state.services.materials.list().await?;
    Ok(Json(materials))
}

/// Get a material by ID
#[utoipa::path(
    get,
    path = "/materials/{id}",
    tag = "materials",
    params(("id" = Uuid, Path, description = "Material ID")),
    responses(
        (status = 200, description = "Material details", body = Material),
        (status = 404, description = "Material not found")
    )
)]
pub async fn get_material(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Material>> {
    let material = state.services.materials.get_by_id(id).await?;
    Ok(Json(material))
}

/// Create a new material (available by default)
#[utoipa::path(
    post,
    path = "/materials",
    tag = "materials",
    request_body = CreateMaterial,
    responses(
        (status = 201, description = "Material created", body = Material),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_material(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let material = state.services.materials.create(data).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// Update a material. Label and deposit are required on every update.
#[utoipa::path(
    put,
    path = "/materials/{id}",
    tag = "materials",
    params(("id" = Uuid, Path, description = "Material ID")),
    request_body = UpdateMaterial,
    responses(
        (status = 200, description = "Material updated", body = Material),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Material not found")
    )
)]
pub async fn update_material(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ApiJson(data): ApiJson<UpdateMaterial>,
) -> AppResult<Json<Material>> {
    let material = state.services.materials.update(id, data).await?;
    Ok(Json(material))
}

/// Delete a material, blocked while any borrowing references it
#[utoipa::path(
    delete,
    path = "/materials/{id}",
    tag = "materials",
    params(("id" = Uuid, Path, description = "Material ID")),
    responses(
        (status = 200, description = "Material deleted", body = MessageResponse),
        (status = 400, description = "Material is referenced by a borrowing"),
        (status = 404, description = "Material not found")
    )
)]
pub async fn delete_material(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.materials.delete(id).await?;
    Ok(Json(MessageResponse::new("Material deleted successfully")))
}

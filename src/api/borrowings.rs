//! Borrowing lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::borrowing::{Borrowing, BorrowingDetails, CreateBorrowing},
};

use super::{ApiJson, MessageResponse};

/// List all borrowings with joined person and material details
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    responses(
        (status = 200, description = "List of borrowings with resolved person and material", body = Vec<BorrowingDetails>),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_borrowings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BorrowingDetails>>> {
    let borrowings = state.services.borrowings.list().await?;
    Ok(Json(borrowings))
}

/// Register a loan
#[utoipa::path(
    post,
    path = "/borrowings/add",
    tag = "borrowings",
    request_body = CreateBorrowing,
    responses(
        (status = 201, description = "Borrowing created", body = Borrowing),
        (status = 400, description = "Missing or invalid field")
    )
)]
pub async fn create_borrowing(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateBorrowing>,
) -> AppResult<(StatusCode, Json<Borrowing>)> {
    let borrowing = state.services.borrowings.create(data).await?;
    Ok((StatusCode::CREATED, Json(borrowing)))
}

/// Mark a borrowed material as returned
#[utoipa::path(
    put,
    path = "/borrowings/return/{id}",
    tag = "borrowings",
    params(("id" = Uuid, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Material returned", body = MessageResponse),
        (status = 404, description = "Borrowing not found")
    )
)]
pub async fn return_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowings.return_loan(id).await?;
    Ok(Json(MessageResponse::new("Material returned successfully")))
}

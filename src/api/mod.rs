//! API handlers for Lendstock REST endpoints

pub mod borrowings;
pub mod health;
pub mod materials;
pub mod openapi;
pub mod persons;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// JSON body extractor mapping deserialization failures to validation
/// errors, so a malformed or type-mismatched body surfaces as 400 with the
/// standard error body instead of axum's bare 422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// Confirmation body for delete and return operations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

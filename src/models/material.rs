//! Material (lendable inventory item) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Material record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Material {
    pub id: Uuid,
    /// Label / description
    #[serde(rename = "libelle")]
    pub label: String,
    /// Refundable deposit amount, non-negative
    #[serde(rename = "kaution")]
    pub deposit: f64,
    /// Whether the material is currently available for lending
    #[serde(rename = "disponible")]
    pub available: bool,
}

/// Create material request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMaterial {
    #[serde(rename = "libelle")]
    pub label: Option<String>,
    #[serde(rename = "kaution")]
    pub deposit: Option<f64>,
    #[serde(rename = "disponible")]
    pub available: Option<bool>,
}

/// Update material request
///
/// Label and deposit stay required on update, matching create. A request
/// that only flips `disponible` is rejected.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaterial {
    #[serde(rename = "libelle")]
    pub label: Option<String>,
    #[serde(rename = "kaution")]
    pub deposit: Option<f64>,
    #[serde(rename = "disponible")]
    pub available: Option<bool>,
}

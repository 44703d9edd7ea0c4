//! Person (borrower) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Person record
///
/// Wire field names (`nom`, `prenom`, `tel`) follow the historical JSON API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Person {
    pub id: Uuid,
    /// Last name
    #[serde(rename = "nom")]
    pub last_name: String,
    /// First name
    #[serde(rename = "prenom")]
    pub first_name: String,
    /// Phone number
    #[serde(rename = "tel")]
    pub phone: String,
    /// Email address, globally unique
    pub email: String,
}

/// Create person request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePerson {
    #[serde(rename = "nom")]
    pub last_name: Option<String>,
    #[serde(rename = "prenom")]
    pub first_name: Option<String>,
    #[serde(rename = "tel")]
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Update person request (partial merge)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePerson {
    #[serde(rename = "nom")]
    pub last_name: Option<String>,
    #[serde(rename = "prenom")]
    pub first_name: Option<String>,
    #[serde(rename = "tel")]
    pub phone: Option<String>,
    pub email: Option<String>,
}

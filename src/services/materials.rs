//! Material (inventory) management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::material::{CreateMaterial, Material, UpdateMaterial},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaterialsService {
    repository: Repository,
}

impl MaterialsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Material>> {
        self.repository.materials.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Material> {
        self.repository.materials.get_by_id(id).await
    }

    /// Create a material; availability defaults to true
    pub async fn create(&self, data: CreateMaterial) -> AppResult<Material> {
        let (label, deposit) = validate_required_fields(&data.label, data.deposit)?;
        self.repository
            .materials
            .create(label, deposit, data.available)
            .await
    }

    /// Update a material. The required-field validation runs again here:
    /// label and deposit must be supplied even when only availability
    /// changes.
    pub async fn update(&self, id: Uuid, data: UpdateMaterial) -> AppResult<Material> {
        let (label, deposit) = validate_required_fields(&data.label, data.deposit)?;
        self.repository
            .materials
            .update(id, label, deposit, data.available)
            .await
    }

    /// Delete a material unless any borrowing, open or returned, references it
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.borrowings.exists_for_material(id).await? {
            return Err(AppError::ReferentialIntegrity(
                "cannot delete material: borrowing history references it".to_string(),
            ));
        }
        self.repository.materials.delete(id).await
    }
}

/// Shared create/update validation: label present and non-empty, deposit
/// present and non-negative.
fn validate_required_fields(label: &Option<String>, deposit: Option<f64>) -> AppResult<(&str, f64)> {
    let label = match label.as_deref() {
        Some(l) if !l.is_empty() => l,
        _ => return Err(AppError::Validation("libelle is required".to_string())),
    };
    let deposit = match deposit {
        Some(d) if d >= 0.0 => d,
        Some(_) => {
            return Err(AppError::Validation(
                "kaution must be non-negative".to_string(),
            ))
        }
        None => return Err(AppError::Validation("kaution is required".to_string())),
    };
    Ok((label, deposit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_label_and_deposit() {
        let label = Some("Projecteur".to_string());
        let (l, d) = validate_required_fields(&label, Some(50.0)).unwrap();
        assert_eq!(l, "Projecteur");
        assert_eq!(d, 50.0);
    }

    #[test]
    fn accepts_zero_deposit() {
        let label = Some("Cable HDMI".to_string());
        assert!(validate_required_fields(&label, Some(0.0)).is_ok());
    }

    #[test]
    fn rejects_missing_deposit() {
        let label = Some("Projecteur".to_string());
        let err = validate_required_fields(&label, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("kaution")));
    }

    #[test]
    fn rejects_negative_deposit() {
        let label = Some("Projecteur".to_string());
        let err = validate_required_fields(&label, Some(-1.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("kaution")));
    }

    #[test]
    fn rejects_missing_label() {
        let err = validate_required_fields(&None, Some(50.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("libelle")));
    }
}

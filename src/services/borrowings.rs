//! Borrowing (loan) lifecycle service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{due_date, Borrowing, BorrowingDetails, CreateBorrowing},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowingsService {
    repository: Repository,
}

impl BorrowingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all borrowings with joined person and material data
    pub async fn list(&self) -> AppResult<Vec<BorrowingDetails>> {
        self.repository.borrowings.list_with_details().await
    }

    /// Register a loan: compute the due date, persist the borrowing and mark
    /// the material unavailable.
    pub async fn create(&self, data: CreateBorrowing) -> AppResult<Borrowing> {
        let person_id = data
            .person_id
            .ok_or_else(|| AppError::Validation("personId is required".to_string()))?;
        let material_id = data
            .material_id
            .ok_or_else(|| AppError::Validation("materialId is required".to_string()))?;
        let duration_days = data
            .duration_days
            .ok_or_else(|| AppError::Validation("dureeJours is required".to_string()))?;
        if duration_days < 0 {
            return Err(AppError::Validation(
                "dureeJours must not be negative".to_string(),
            ));
        }

        if !self.repository.persons.exists(person_id).await? {
            return Err(AppError::Validation(format!(
                "personId {} does not reference a known person",
                person_id
            )));
        }
        if !self.repository.materials.exists(material_id).await? {
            return Err(AppError::Validation(format!(
                "materialId {} does not reference a known material",
                material_id
            )));
        }

        let start = Utc::now();
        let due = due_date(start, duration_days).ok_or_else(|| {
            AppError::Validation("dureeJours is too large".to_string())
        })?;

        self.repository
            .borrowings
            .create(person_id, material_id, duration_days, start, due)
            .await
    }

    /// Process a return: flag the borrowing returned and make the material
    /// available again. Returning an already-returned borrowing is accepted
    /// and re-runs the same writes.
    pub async fn return_loan(&self, id: Uuid) -> AppResult<()> {
        let borrowing = self.repository.borrowings.get_by_id(id).await?;

        self.repository
            .borrowings
            .mark_returned(borrowing.id, borrowing.material_id)
            .await
    }
}

//! Business logic services

pub mod borrowings;
pub mod materials;
pub mod persons;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub persons: persons::PersonsService,
    pub materials: materials::MaterialsService,
    pub borrowings: borrowings::BorrowingsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            persons: persons::PersonsService::new(repository.clone()),
            materials: materials::MaterialsService::new(repository.clone()),
            borrowings: borrowings::BorrowingsService::new(repository.clone()),
            repository,
        }
    }

    /// Check the record store answers, for readiness probes
    pub async fn ping_store(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

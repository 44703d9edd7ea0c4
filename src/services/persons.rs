//! Person (borrower) management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::person::{CreatePerson, Person, UpdatePerson},
    repository::Repository,
};

#[derive(Clone)]
pub struct PersonsService {
    repository: Repository,
}

impl PersonsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Person>> {
        self.repository.persons.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Person> {
        self.repository.persons.get_by_id(id).await
    }

    /// Create a person after checking required fields and email uniqueness
    pub async fn create(&self, data: CreatePerson) -> AppResult<Person> {
        let (last_name, first_name, phone, email) = validate_create(&data)?;

        if self.repository.persons.email_exists(email, None).await? {
            return Err(AppError::Validation(format!(
                "email {} is already registered",
                email
            )));
        }

        self.repository
            .persons
            .create(last_name, first_name, phone, email)
            .await
    }

    /// Partial update. Email uniqueness is re-checked when the email changes.
    pub async fn update(&self, id: Uuid, data: UpdatePerson) -> AppResult<Person> {
        for (value, field) in [
            (&data.last_name, "nom"),
            (&data.first_name, "prenom"),
            (&data.phone, "tel"),
            (&data.email, "email"),
        ] {
            if matches!(value.as_deref(), Some("")) {
                return Err(AppError::Validation(format!("{} must not be empty", field)));
            }
        }

        if let Some(ref email) = data.email {
            if self.repository.persons.email_exists(email, Some(id)).await? {
                return Err(AppError::Validation(format!(
                    "email {} is already registered",
                    email
                )));
            }
        }

        self.repository
            .persons
            .update(
                id,
                data.last_name.as_deref(),
                data.first_name.as_deref(),
                data.phone.as_deref(),
                data.email.as_deref(),
            )
            .await
    }

    /// Delete a person unless any borrowing, open or returned, references it
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.borrowings.exists_for_person(id).await? {
            return Err(AppError::ReferentialIntegrity(
                "cannot delete person: borrowing history references it".to_string(),
            ));
        }
        self.repository.persons.delete(id).await
    }
}

/// Check all required person fields are present and non-empty.
/// Error messages name the wire field that failed.
fn validate_create(data: &CreatePerson) -> AppResult<(&str, &str, &str, &str)> {
    let last_name = require_field(&data.last_name, "nom")?;
    let first_name = require_field(&data.first_name, "prenom")?;
    let phone = require_field(&data.phone, "tel")?;
    let email = require_field(&data.email, "email")?;
    Ok((last_name, first_name, phone, email))
}

fn require_field<'a>(value: &'a Option<String>, field: &str) -> AppResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

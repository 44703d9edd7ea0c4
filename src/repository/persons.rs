//! Persons repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::person::Person,
};

#[derive(Clone)]
pub struct PersonsRepository {
    pool: Pool<Postgres>,
}

impl PersonsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all persons
    pub async fn list(&self) -> AppResult<Vec<Person>> {
        let persons = sqlx::query_as::<_, Person>(
            "SELECT * FROM persons ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(persons)
    }

    /// Get person by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Person> {
        sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Person with id {} not found", id)))
    }

    /// Check if an email is already taken, optionally excluding one person
    pub async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM persons WHERE LOWER(email) = LOWER($1) AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM persons WHERE LOWER(email) = LOWER($1))",
            )
            .bind(email)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// Insert a new person
    pub async fn create(
        &self,
        last_name: &str,
        first_name: &str,
        phone: &str,
        email: &str,
    ) -> AppResult<Person> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons (last_name, first_name, phone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(last_name)
        .bind(first_name)
        .bind(phone)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(person)
    }

    /// Partial update: only the supplied fields are written
    pub async fn update(
        &self,
        id: Uuid,
        last_name: Option<&str>,
        first_name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Person> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            UPDATE persons SET
                last_name = COALESCE($2, last_name),
                first_name = COALESCE($3, first_name),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(last_name)
        .bind(first_name)
        .bind(phone)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person with id {} not found", id)))?;
        Ok(person)
    }

    /// Delete a person
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Person with id {} not found", id)));
        }
        Ok(())
    }

    /// Check the person exists without fetching the full row
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM persons WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

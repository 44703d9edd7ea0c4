//! Materials repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::material::Material,
};

#[derive(Clone)]
pub struct MaterialsRepository {
    pool: Pool<Postgres>,
}

impl MaterialsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all materials
    pub async fn list(&self) -> AppResult<Vec<Material>> {
        let materials =
            sqlx::query_as::<_, Material>("SELECT * FROM materials ORDER BY label")
                .fetch_all(&self.pool)
                .await?;
        Ok(materials)
    }

    /// Get material by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Material> {
        sqlx::query_as::<_, Material>("SELECT * FROM materials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Material with id {} not found", id)))
    }

    /// Insert a new material. Availability defaults to true when omitted.
    pub async fn create(
        &self,
        label: &str,
        deposit: f64,
        available: Option<bool>,
    ) -> AppResult<Material> {
        let material = sqlx::query_as::<_, Material>(
            r#"
            INSERT INTO materials (label, deposit, available)
            VALUES ($1, $2, COALESCE($3, TRUE))
            RETURNING *
            "#,
        )
        .bind(label)
        .bind(deposit)
        .bind(available)
        .fetch_one(&self.pool)
        .await?;
        Ok(material)
    }

    /// Update a material. Label and deposit are always written; availability
    /// keeps its stored value when omitted.
    pub async fn update(
        &self,
        id: Uuid,
        label: &str,
        deposit: f64,
        available: Option<bool>,
    ) -> AppResult<Material> {
        let material = sqlx::query_as::<_, Material>(
            r#"
            UPDATE materials SET
                label = $2,
                deposit = $3,
                available = COALESCE($4, available)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(label)
        .bind(deposit)
        .bind(available)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Material with id {} not found", id)))?;
        Ok(material)
    }

    /// Delete a material
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Material with id {} not found", id)));
        }
        Ok(())
    }

    /// Check the material exists without fetching the full row
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM materials WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

//! Borrowings repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        borrowing::{Borrowing, BorrowingDetails},
        material::Material,
        person::Person,
    },
};

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get borrowing by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Borrowing> {
        sqlx::query_as::<_, Borrowing>("SELECT * FROM borrowings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing with id {} not found", id)))
    }

    /// List all borrowings with their person and material resolved inline
    pub async fn list_with_details(&self) -> AppResult<Vec<BorrowingDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.start_date, b.duration_days, b.due_date, b.returned,
                   p.id as person_id, p.last_name, p.first_name, p.phone, p.email,
                   m.id as material_id, m.label, m.deposit, m.available
            FROM borrowings b
            JOIN persons p ON b.person_id = p.id
            JOIN materials m ON b.material_id = m.id
            ORDER BY b.start_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for row in rows {
            result.push(BorrowingDetails {
                id: row.get("id"),
                person: Person {
                    id: row.get("person_id"),
                    last_name: row.get("last_name"),
                    first_name: row.get("first_name"),
                    phone: row.get("phone"),
                    email: row.get("email"),
                },
                material: Material {
                    id: row.get("material_id"),
                    label: row.get("label"),
                    deposit: row.get("deposit"),
                    available: row.get("available"),
                },
                start_date: row.get("start_date"),
                duration_days: row.get("duration_days"),
                due_date: row.get("due_date"),
                returned: row.get("returned"),
            });
        }

        Ok(result)
    }

    /// Create a borrowing and mark its material unavailable.
    ///
    /// Both writes run in one transaction so a failed availability update
    /// cannot leave an open borrowing against a material still marked
    /// available.
    pub async fn create(
        &self,
        person_id: Uuid,
        material_id: Uuid,
        duration_days: i32,
        start_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<Borrowing> {
        let mut tx = self.pool.begin().await?;

        let borrowing = sqlx::query_as::<_, Borrowing>(
            r#"
            INSERT INTO borrowings (person_id, material_id, start_date, duration_days, due_date, returned)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING *
            "#,
        )
        .bind(person_id)
        .bind(material_id)
        .bind(start_date)
        .bind(duration_days)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE materials SET available = FALSE WHERE id = $1")
            .bind(material_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(borrowing)
    }

    /// Mark a borrowing returned and its material available again, in one
    /// transaction.
    pub async fn mark_returned(&self, id: Uuid, material_id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE borrowings SET returned = TRUE WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE materials SET available = TRUE WHERE id = $1")
            .bind(material_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Check whether any borrowing, open or returned, references the person
    pub async fn exists_for_person(&self, person_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM borrowings WHERE person_id = $1)",
        )
        .bind(person_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Check whether any borrowing, open or returned, references the material
    pub async fn exists_for_material(&self, material_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM borrowings WHERE material_id = $1)",
        )
        .bind(material_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

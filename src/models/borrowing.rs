//! Borrowing (loan record) model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{material::Material, person::Person};

/// Borrowing record linking one Person to one Material
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrowing {
    pub id: Uuid,
    #[serde(rename = "personId")]
    pub person_id: Uuid,
    #[serde(rename = "materialId")]
    pub material_id: Uuid,
    /// Loan start timestamp
    #[serde(rename = "dateEmprunt")]
    pub start_date: DateTime<Utc>,
    /// Agreed loan duration in days
    #[serde(rename = "dureeJours")]
    pub duration_days: i32,
    /// Due date, computed once at creation as start + duration days
    #[serde(rename = "dateRetourPrevue")]
    pub due_date: DateTime<Utc>,
    /// Whether the material has been returned
    #[serde(rename = "estRendu")]
    pub returned: bool,
}

/// Borrowing with its Person and Material resolved inline
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowingDetails {
    pub id: Uuid,
    pub person: Person,
    pub material: Material,
    #[serde(rename = "dateEmprunt")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "dureeJours")]
    pub duration_days: i32,
    #[serde(rename = "dateRetourPrevue")]
    pub due_date: DateTime<Utc>,
    #[serde(rename = "estRendu")]
    pub returned: bool,
}

/// Create borrowing (loan) request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBorrowing {
    #[serde(rename = "personId")]
    pub person_id: Option<Uuid>,
    #[serde(rename = "materialId")]
    pub material_id: Option<Uuid>,
    #[serde(rename = "dureeJours")]
    pub duration_days: Option<i32>,
}

/// Compute the due date of a loan: start plus the agreed duration in days.
/// Returns None when the addition leaves chrono's representable date range.
pub fn due_date(start: DateTime<Utc>, duration_days: i32) -> Option<DateTime<Utc>> {
    start.checked_add_signed(Duration::days(duration_days as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn due_date_adds_whole_days() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        assert_eq!(due_date(start, 0), Some(start));
        assert_eq!(
            due_date(start, 1),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 12, 30, 0).unwrap())
        );
        assert_eq!(
            due_date(start, 30),
            Some(Utc.with_ymd_and_hms(2024, 3, 31, 12, 30, 0).unwrap())
        );
        assert_eq!(
            due_date(start, 365),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn due_date_refuses_durations_past_the_calendar_limit() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(due_date(start, i32::MAX), None);
    }

    #[test]
    fn borrowing_serializes_with_wire_names() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let borrowing = Borrowing {
            id: Uuid::nil(),
            person_id: Uuid::nil(),
            material_id: Uuid::nil(),
            start_date: start,
            duration_days: 7,
            due_date: due_date(start, 7).unwrap(),
            returned: false,
        };
        let json = serde_json::to_value(&borrowing).unwrap();
        assert_eq!(json["dureeJours"], 7);
        assert_eq!(json["estRendu"], false);
        assert!(json["dateRetourPrevue"].is_string());
    }
}

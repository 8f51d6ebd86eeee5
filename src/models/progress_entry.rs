use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::validation::{optional_text, validate_positive, ValidationError};

/// One entry in a user's append-only progress log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub body_measurements: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressEntryRequest {
    pub date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub body_measurements: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProgressEntry {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub body_measurements: String,
    pub notes: String,
}

impl CreateProgressEntryRequest {
    pub fn validate(self, user_id: Uuid) -> Result<NewProgressEntry, ValidationError> {
        let date = self.date.ok_or(ValidationError::Missing("date"))?;
        let weight = self.weight.ok_or(ValidationError::Missing("weight"))?;

        Ok(NewProgressEntry {
            user_id,
            date,
            weight: validate_positive("weight", weight)?,
            body_measurements: optional_text(self.body_measurements.as_deref())
                .unwrap_or_default(),
            notes: optional_text(self.notes.as_deref()).unwrap_or_default(),
        })
    }
}

impl NewProgressEntry {
    pub fn into_entry(self, id: Uuid, created_at: DateTime<Utc>) -> ProgressEntry {
        ProgressEntry {
            id,
            user_id: self.user_id,
            date: self.date,
            weight: self.weight,
            body_measurements: self.body_measurements,
            notes: self.notes,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_iso_date() {
        let request: CreateProgressEntryRequest = serde_json::from_value(serde_json::json!({
            "date": "2025-01-09",
            "weight": 70,
            "bodyMeasurements": "Chest: 100cm",
            "notes": "Feeling good!"
        }))
        .unwrap();

        let entry = request.validate(Uuid::new_v4()).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
        assert_eq!(entry.weight, 70.0);
        assert_eq!(entry.body_measurements, "Chest: 100cm");
    }

    #[test]
    fn test_weight_must_be_positive() {
        let request = CreateProgressEntryRequest {
            date: NaiveDate::from_ymd_opt(2025, 1, 9),
            weight: Some(0.0),
            ..Default::default()
        };

        assert!(matches!(
            request.validate(Uuid::new_v4()),
            Err(ValidationError::Invalid { field: "weight", .. })
        ));
    }
}

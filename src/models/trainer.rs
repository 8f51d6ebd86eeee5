use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Trainer account; trainers author workout plans.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub contact_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTrainer {
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub contact_number: Option<String>,
    pub password_hash: String,
}

impl NewTrainer {
    pub fn into_trainer(self, id: Uuid, created_at: DateTime<Utc>) -> Trainer {
        Trainer {
            id,
            name: self.name,
            email: self.email,
            specialization: self.specialization,
            experience_years: self.experience_years,
            contact_number: self.contact_number,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored user account. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub email: String,
    pub contact_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A validated signup, ready to persist.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub email: String,
    pub contact_number: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn into_user(self, id: Uuid, created_at: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
            email: self.email,
            contact_number: self.contact_number,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

// Wire types shared with the fitness tracker API

mod goal;
mod plan;
mod progress;

pub use goal::{FitnessGoal, GoalUpdate, NewGoal};
pub use plan::{NewWorkoutPlan, WorkoutPlan};
pub use progress::{ProgressEntry, ProgressForm, ProgressRow};

use serde::{Deserialize, Serialize};

/// Body of `POST /signup`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

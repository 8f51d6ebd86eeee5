use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::validation::{optional_text, replacement_text, required_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub plan_name: String,
    pub goal: String,
    pub duration: String,
    pub description: String,
    pub trainer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/workoutPlans/createPlan`. A `trainerId` in the body is
/// ignored in favour of the authenticated trainer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPlanRequest {
    pub plan_name: Option<String>,
    pub goal: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutPlanRequest {
    pub plan_name: Option<String>,
    pub goal: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewWorkoutPlan {
    pub plan_name: String,
    pub goal: String,
    pub duration: String,
    pub description: String,
    pub trainer_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutPlanChanges {
    pub plan_name: Option<String>,
    pub goal: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl CreateWorkoutPlanRequest {
    pub fn validate(self, trainer_id: Uuid) -> Result<NewWorkoutPlan, ValidationError> {
        Ok(NewWorkoutPlan {
            plan_name: required_text("planName", self.plan_name.as_deref())?,
            goal: required_text("goal", self.goal.as_deref())?,
            duration: required_text("duration", self.duration.as_deref())?,
            description: optional_text(self.description.as_deref()).unwrap_or_default(),
            trainer_id,
        })
    }
}

impl UpdateWorkoutPlanRequest {
    pub fn validate(self) -> Result<WorkoutPlanChanges, ValidationError> {
        Ok(WorkoutPlanChanges {
            plan_name: replacement_text("planName", self.plan_name.as_deref())?,
            goal: replacement_text("goal", self.goal.as_deref())?,
            duration: replacement_text("duration", self.duration.as_deref())?,
            // An empty description is a legitimate value.
            description: self.description.map(|text| text.trim().to_string()),
        })
    }
}

impl NewWorkoutPlan {
    pub fn into_plan(self, id: Uuid, now: DateTime<Utc>) -> WorkoutPlan {
        WorkoutPlan {
            id,
            plan_name: self.plan_name,
            goal: self.goal,
            duration: self.duration,
            description: self.description,
            trainer_id: self.trainer_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl WorkoutPlan {
    pub fn apply(&mut self, changes: WorkoutPlanChanges, now: DateTime<Utc>) {
        if let Some(plan_name) = changes.plan_name {
            self.plan_name = plan_name;
        }
        if let Some(goal) = changes.goal {
            self.goal = goal;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub plan_name: String,
    pub goal: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    pub trainer_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutPlan {
    pub plan_name: String,
    pub goal: String,
    pub duration: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

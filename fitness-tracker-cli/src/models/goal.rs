use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessGoal {
    pub id: String,
    pub goal_type: String,
    pub target: f64,
    pub timeline: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_type: String,
    pub target: f64,
    pub timeline: String,
}

/// Fields to change; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self.goal_type.is_none() && self.target.is_none() && self.timeline.is_none()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::validation::{
    replacement_text, required_text, validate_non_negative, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FitnessGoal {
    pub id: Uuid,
    pub goal_type: String,
    pub target: f64,
    pub timeline: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /fitnessGoals`. Any `userId` in the body is ignored; the
/// owner always comes from the authenticated session.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFitnessGoalRequest {
    pub goal_type: Option<String>,
    pub target: Option<f64>,
    pub timeline: Option<String>,
}

/// Body of `PATCH /fitnessGoals/:id`; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFitnessGoalRequest {
    pub goal_type: Option<String>,
    pub target: Option<f64>,
    pub timeline: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewFitnessGoal {
    pub goal_type: String,
    pub target: f64,
    pub timeline: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct FitnessGoalChanges {
    pub goal_type: Option<String>,
    pub target: Option<f64>,
    pub timeline: Option<String>,
}

impl CreateFitnessGoalRequest {
    pub fn validate(self, user_id: Uuid) -> Result<NewFitnessGoal, ValidationError> {
        let target = self.target.ok_or(ValidationError::Missing("target"))?;

        Ok(NewFitnessGoal {
            goal_type: required_text("goalType", self.goal_type.as_deref())?,
            target: validate_non_negative("target", target)?,
            timeline: required_text("timeline", self.timeline.as_deref())?,
            user_id,
        })
    }
}

impl UpdateFitnessGoalRequest {
    pub fn validate(self) -> Result<FitnessGoalChanges, ValidationError> {
        Ok(FitnessGoalChanges {
            goal_type: replacement_text("goalType", self.goal_type.as_deref())?,
            target: self
                .target
                .map(|target| validate_non_negative("target", target))
                .transpose()?,
            timeline: replacement_text("timeline", self.timeline.as_deref())?,
        })
    }
}

impl NewFitnessGoal {
    pub fn into_goal(self, id: Uuid, now: DateTime<Utc>) -> FitnessGoal {
        FitnessGoal {
            id,
            goal_type: self.goal_type,
            target: self.target,
            timeline: self.timeline,
            user_id: self.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl FitnessGoal {
    /// Merge supplied changes; the owner is never touched.
    pub fn apply(&mut self, changes: FitnessGoalChanges, now: DateTime<Utc>) {
        if let Some(goal_type) = changes.goal_type {
            self.goal_type = goal_type;
        }
        if let Some(target) = changes.target {
            self.target = target;
        }
        if let Some(timeline) = changes.timeline {
            self.timeline = timeline;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let owner = Uuid::new_v4();
        let request = CreateFitnessGoalRequest {
            goal_type: Some("Weight Loss".to_string()),
            target: Some(10.0),
            timeline: Some("3 months".to_string()),
        };

        let goal = request.validate(owner).unwrap();
        assert_eq!(goal.goal_type, "Weight Loss");
        assert_eq!(goal.user_id, owner);

        let missing_target = CreateFitnessGoalRequest {
            goal_type: Some("Weight Loss".to_string()),
            target: None,
            timeline: Some("3 months".to_string()),
        };
        assert_eq!(
            missing_target.validate(owner).unwrap_err(),
            ValidationError::Missing("target")
        );
    }

    #[test]
    fn test_apply_is_partial_merge() {
        let owner = Uuid::new_v4();
        let mut goal = NewFitnessGoal {
            goal_type: "Endurance".to_string(),
            target: 50.0,
            timeline: "6 months".to_string(),
            user_id: owner,
        }
        .into_goal(Uuid::new_v4(), Utc::now());

        let changes = UpdateFitnessGoalRequest {
            target: Some(60.0),
            ..Default::default()
        }
        .validate()
        .unwrap();
        goal.apply(changes, Utc::now());

        assert_eq!(goal.target, 60.0);
        assert_eq!(goal.goal_type, "Endurance");
        assert_eq!(goal.timeline, "6 months");
        assert_eq!(goal.user_id, owner);
    }

    #[test]
    fn test_serializes_camel_case() {
        let goal = NewFitnessGoal {
            goal_type: "Flexibility".to_string(),
            target: 30.0,
            timeline: "3 months".to_string(),
            user_id: Uuid::new_v4(),
        }
        .into_goal(Uuid::new_v4(), Utc::now());

        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["goalType"], "Flexibility");
        assert!(json["userId"].is_string());
        assert!(json.get("goal_type").is_none());
    }
}

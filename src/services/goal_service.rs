use std::sync::Arc;
use uuid::Uuid;

use crate::models::{CreateFitnessGoalRequest, FitnessGoal, UpdateFitnessGoalRequest};
use crate::repository::GoalRepository;
use crate::services::{parse_id, ServiceError};

const RESOURCE: &str = "Fitness goal";

#[derive(Clone)]
pub struct GoalService {
    goals: Arc<dyn GoalRepository>,
    scope_listing: bool,
}

impl GoalService {
    /// `scope_listing` restricts `list_goals` to the caller's own goals.
    pub fn new(goals: Arc<dyn GoalRepository>, scope_listing: bool) -> Self {
        Self {
            goals,
            scope_listing,
        }
    }

    pub async fn create_goal(
        &self,
        user_id: Uuid,
        request: CreateFitnessGoalRequest,
    ) -> Result<FitnessGoal, ServiceError> {
        let goal = request.validate(user_id)?;
        let goal = self.goals.insert(goal).await?;

        tracing::info!("Created fitness goal {} for user {}", goal.id, user_id);
        Ok(goal)
    }

    pub async fn list_goals(&self, user_id: Uuid) -> Result<Vec<FitnessGoal>, ServiceError> {
        let owner = self.scope_listing.then_some(user_id);
        Ok(self.goals.list(owner).await?)
    }

    pub async fn get_goal(&self, user_id: Uuid, raw_id: &str) -> Result<FitnessGoal, ServiceError> {
        let id = parse_id(raw_id, RESOURCE)?;

        self.goals
            .find(id, user_id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn update_goal(
        &self,
        user_id: Uuid,
        raw_id: &str,
        request: UpdateFitnessGoalRequest,
    ) -> Result<FitnessGoal, ServiceError> {
        let id = parse_id(raw_id, RESOURCE)?;
        let changes = request.validate()?;

        self.goals
            .update(id, user_id, changes)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn delete_goal(&self, user_id: Uuid, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_id(raw_id, RESOURCE)?;

        if !self.goals.delete(id, user_id).await? {
            return Err(ServiceError::NotFound(RESOURCE));
        }

        tracing::info!("Deleted fitness goal {} for user {}", id, user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use assert_matches::assert_matches;

    fn create_request(goal_type: &str) -> CreateFitnessGoalRequest {
        CreateFitnessGoalRequest {
            goal_type: Some(goal_type.to_string()),
            target: Some(10.0),
            timeline: Some("3 months".to_string()),
        }
    }

    #[tokio::test]
    async fn test_listing_scope_flag() {
        let store = Arc::new(MemoryStore::new());
        let unscoped = GoalService::new(store.clone(), false);
        let scoped = GoalService::new(store, true);
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        unscoped.create_goal(alice, create_request("Weight Loss")).await.unwrap();
        unscoped.create_goal(bob, create_request("Endurance")).await.unwrap();

        assert_eq!(unscoped.list_goals(alice).await.unwrap().len(), 2);

        let own = scoped.list_goals(alice).await.unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].user_id, alice);
    }

    #[tokio::test]
    async fn test_foreign_goal_is_not_found() {
        let service = GoalService::new(Arc::new(MemoryStore::new()), false);
        let owner = Uuid::new_v4();
        let goal = service.create_goal(owner, create_request("Weight Loss")).await.unwrap();
        let id = goal.id.to_string();

        let stranger = Uuid::new_v4();
        assert_matches!(
            service.get_goal(stranger, &id).await,
            Err(ServiceError::NotFound("Fitness goal"))
        );
        assert_matches!(
            service.delete_goal(stranger, &id).await,
            Err(ServiceError::NotFound(_))
        );
        assert!(service.get_goal(owner, &id).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_create_is_validation_error() {
        let service = GoalService::new(Arc::new(MemoryStore::new()), false);
        let request = CreateFitnessGoalRequest {
            goal_type: Some("Weight Loss".to_string()),
            ..Default::default()
        };

        assert_matches!(
            service.create_goal(Uuid::new_v4(), request).await,
            Err(ServiceError::Validation(_))
        );
    }
}

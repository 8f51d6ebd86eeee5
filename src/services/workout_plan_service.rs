use std::sync::Arc;
use uuid::Uuid;

use crate::models::{CreateWorkoutPlanRequest, UpdateWorkoutPlanRequest, WorkoutPlan};
use crate::repository::WorkoutPlanRepository;
use crate::services::{parse_id, ServiceError};

const RESOURCE: &str = "Workout plan";

#[derive(Clone)]
pub struct WorkoutPlanService {
    plans: Arc<dyn WorkoutPlanRepository>,
}

impl WorkoutPlanService {
    pub fn new(plans: Arc<dyn WorkoutPlanRepository>) -> Self {
        Self { plans }
    }

    /// Create a plan owned by `trainer_id`
    pub async fn create_plan(
        &self,
        trainer_id: Uuid,
        request: CreateWorkoutPlanRequest,
    ) -> Result<WorkoutPlan, ServiceError> {
        let plan = request.validate(trainer_id)?;
        let plan = self.plans.insert(plan).await?;

        tracing::info!("Trainer {} created workout plan {}", trainer_id, plan.id);
        Ok(plan)
    }

    /// Every stored plan, in creation order
    pub async fn list_plans(&self) -> Result<Vec<WorkoutPlan>, ServiceError> {
        Ok(self.plans.list().await?)
    }

    pub async fn get_plan(&self, trainer_id: Uuid, raw_id: &str) -> Result<WorkoutPlan, ServiceError> {
        let id = parse_id(raw_id, RESOURCE)?;

        self.plans
            .find(id, trainer_id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn update_plan(
        &self,
        trainer_id: Uuid,
        raw_id: &str,
        request: UpdateWorkoutPlanRequest,
    ) -> Result<WorkoutPlan, ServiceError> {
        let id = parse_id(raw_id, RESOURCE)?;
        let changes = request.validate()?;

        self.plans
            .update(id, trainer_id, changes)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn delete_plan(&self, trainer_id: Uuid, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_id(raw_id, RESOURCE)?;

        if !self.plans.delete(id, trainer_id).await? {
            return Err(ServiceError::NotFound(RESOURCE));
        }

        tracing::info!("Trainer {} deleted workout plan {}", trainer_id, id);
        Ok(())
    }
}

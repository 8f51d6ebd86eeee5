use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    GoalRepository, ProgressRepository, RepositoryError, TrainerRepository, UserRepository,
    WorkoutPlanRepository,
};
use crate::models::{
    FitnessGoal, FitnessGoalChanges, NewFitnessGoal, NewProgressEntry, NewTrainer, NewUser,
    NewWorkoutPlan, ProgressEntry, Trainer, User, WorkoutPlan, WorkoutPlanChanges,
};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    trainers: Vec<Trainer>,
    goals: Vec<FitnessGoal>,
    plans: Vec<WorkoutPlan>,
    progress: Vec<ProgressEntry>,
}

/// In-memory store for tests and database-less local runs.
/// Collections keep insertion order, which is the listing order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut collections = self.collections.write().await;
        if collections.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(format!("email {}", user.email)));
        }

        let user = user.into_user(Uuid::new_v4(), Utc::now());
        collections.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TrainerRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Trainer>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections.trainers.iter().find(|t| t.email == email).cloned())
    }

    async fn insert(&self, trainer: NewTrainer) -> Result<Trainer, RepositoryError> {
        let mut collections = self.collections.write().await;
        if collections.trainers.iter().any(|t| t.email == trainer.email) {
            return Err(RepositoryError::Conflict(format!("email {}", trainer.email)));
        }

        let trainer = trainer.into_trainer(Uuid::new_v4(), Utc::now());
        collections.trainers.push(trainer.clone());
        Ok(trainer)
    }
}

#[async_trait]
impl GoalRepository for MemoryStore {
    async fn insert(&self, goal: NewFitnessGoal) -> Result<FitnessGoal, RepositoryError> {
        let goal = goal.into_goal(Uuid::new_v4(), Utc::now());
        self.collections.write().await.goals.push(goal.clone());
        Ok(goal)
    }

    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<FitnessGoal>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .goals
            .iter()
            .filter(|g| owner.map_or(true, |owner| g.user_id == owner))
            .cloned()
            .collect())
    }

    async fn find(&self, id: Uuid, owner: Uuid) -> Result<Option<FitnessGoal>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .goals
            .iter()
            .find(|g| g.id == id && g.user_id == owner)
            .cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: FitnessGoalChanges,
    ) -> Result<Option<FitnessGoal>, RepositoryError> {
        let mut collections = self.collections.write().await;
        let goal = collections
            .goals
            .iter_mut()
            .find(|g| g.id == id && g.user_id == owner);

        Ok(goal.map(|goal| {
            goal.apply(changes, Utc::now());
            goal.clone()
        }))
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, RepositoryError> {
        let mut collections = self.collections.write().await;
        let before = collections.goals.len();
        collections
            .goals
            .retain(|g| !(g.id == id && g.user_id == owner));
        Ok(collections.goals.len() < before)
    }
}

#[async_trait]
impl WorkoutPlanRepository for MemoryStore {
    async fn insert(&self, plan: NewWorkoutPlan) -> Result<WorkoutPlan, RepositoryError> {
        let plan = plan.into_plan(Uuid::new_v4(), Utc::now());
        self.collections.write().await.plans.push(plan.clone());
        Ok(plan)
    }

    async fn list(&self) -> Result<Vec<WorkoutPlan>, RepositoryError> {
        Ok(self.collections.read().await.plans.clone())
    }

    async fn find(&self, id: Uuid, trainer: Uuid) -> Result<Option<WorkoutPlan>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .plans
            .iter()
            .find(|p| p.id == id && p.trainer_id == trainer)
            .cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        trainer: Uuid,
        changes: WorkoutPlanChanges,
    ) -> Result<Option<WorkoutPlan>, RepositoryError> {
        let mut collections = self.collections.write().await;
        let plan = collections
            .plans
            .iter_mut()
            .find(|p| p.id == id && p.trainer_id == trainer);

        Ok(plan.map(|plan| {
            plan.apply(changes, Utc::now());
            plan.clone()
        }))
    }

    async fn delete(&self, id: Uuid, trainer: Uuid) -> Result<bool, RepositoryError> {
        let mut collections = self.collections.write().await;
        let before = collections.plans.len();
        collections
            .plans
            .retain(|p| !(p.id == id && p.trainer_id == trainer));
        Ok(collections.plans.len() < before)
    }
}

#[async_trait]
impl ProgressRepository for MemoryStore {
    async fn insert(&self, entry: NewProgressEntry) -> Result<ProgressEntry, RepositoryError> {
        let entry = entry.into_entry(Uuid::new_v4(), Utc::now());
        self.collections.write().await.progress.push(entry.clone());
        Ok(entry)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .progress
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

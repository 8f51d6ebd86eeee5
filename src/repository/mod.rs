// Persistence seams. Handlers and services only see these traits.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    FitnessGoal, FitnessGoalChanges, NewFitnessGoal, NewProgressEntry, NewTrainer, NewUser,
    NewWorkoutPlan, ProgressEntry, Trainer, User, WorkoutPlan, WorkoutPlanChanges,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
    #[error("Duplicate record: {0}")]
    Conflict(String),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                RepositoryError::Unavailable(err.to_string())
            }
            err => RepositoryError::Database(err),
        }
    }
}

/// Credential store for end users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;
}

/// Credential store for trainers.
#[async_trait]
pub trait TrainerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Trainer>, RepositoryError>;
    async fn insert(&self, trainer: NewTrainer) -> Result<Trainer, RepositoryError>;
}

/// Fitness goals. Single-record operations are scoped to the owning user;
/// `list` is scoped only when an owner is given.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn insert(&self, goal: NewFitnessGoal) -> Result<FitnessGoal, RepositoryError>;
    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<FitnessGoal>, RepositoryError>;
    async fn find(&self, id: Uuid, owner: Uuid) -> Result<Option<FitnessGoal>, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: FitnessGoalChanges,
    ) -> Result<Option<FitnessGoal>, RepositoryError>;
    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, RepositoryError>;
}

/// Workout plans, owned by trainers.
#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    async fn insert(&self, plan: NewWorkoutPlan) -> Result<WorkoutPlan, RepositoryError>;
    async fn list(&self) -> Result<Vec<WorkoutPlan>, RepositoryError>;
    async fn find(&self, id: Uuid, trainer: Uuid) -> Result<Option<WorkoutPlan>, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        trainer: Uuid,
        changes: WorkoutPlanChanges,
    ) -> Result<Option<WorkoutPlan>, RepositoryError>;
    async fn delete(&self, id: Uuid, trainer: Uuid) -> Result<bool, RepositoryError>;
}

/// Append-only progress log, returned oldest first.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn insert(&self, entry: NewProgressEntry) -> Result<ProgressEntry, RepositoryError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ProgressEntry>, RepositoryError>;
}

/// Every store the API needs, behind trait objects so the router can run on
/// PostgreSQL or in memory.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub trainers: Arc<dyn TrainerRepository>,
    pub goals: Arc<dyn GoalRepository>,
    pub plans: Arc<dyn WorkoutPlanRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Repositories {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self::from_store(Arc::new(PgStore::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryStore::new()))
    }

    fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserRepository
            + TrainerRepository
            + GoalRepository
            + WorkoutPlanRepository
            + ProgressRepository
            + 'static,
    {
        Self {
            users: store.clone(),
            trainers: store.clone(),
            goals: store.clone(),
            plans: store.clone(),
            progress: store,
        }
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_pool_exhaustion_is_unavailable() {
        assert_matches!(
            RepositoryError::from(sqlx::Error::PoolTimedOut),
            RepositoryError::Unavailable(_)
        );
        assert_matches!(
            RepositoryError::from(sqlx::Error::PoolClosed),
            RepositoryError::Unavailable(_)
        );
        assert_matches!(
            RepositoryError::from(sqlx::Error::RowNotFound),
            RepositoryError::Database(_)
        );
    }
}

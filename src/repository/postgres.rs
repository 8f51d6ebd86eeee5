use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    GoalRepository, ProgressRepository, RepositoryError, TrainerRepository, UserRepository,
    WorkoutPlanRepository,
};
use crate::models::{
    FitnessGoal, FitnessGoalChanges, NewFitnessGoal, NewProgressEntry, NewTrainer, NewUser,
    NewWorkoutPlan, ProgressEntry, Trainer, User, WorkoutPlan, WorkoutPlanChanges,
};

const USER_COLUMNS: &str =
    "id, name, age, gender, height, weight, email, contact_number, password_hash, created_at";
const TRAINER_COLUMNS: &str =
    "id, name, email, specialization, experience_years, contact_number, password_hash, created_at";
const GOAL_COLUMNS: &str = "id, goal_type, target, timeline, user_id, created_at, updated_at";
const PLAN_COLUMNS: &str =
    "id, plan_name, goal, duration, description, trainer_id, created_at, updated_at";
const PROGRESS_COLUMNS: &str =
    "id, user_id, date, weight, body_measurements, notes, created_at";

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Unique-index violations become `Conflict` so signup can report duplicates.
fn map_insert_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Conflict(db_err.message().to_string())
        }
        _ => RepositoryError::from(err),
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let stored = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, name, age, gender, height, weight, email, contact_number, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.gender)
        .bind(user.height)
        .bind(user.weight)
        .bind(&user.email)
        .bind(&user.contact_number)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;

        Ok(stored)
    }
}

#[async_trait]
impl TrainerRepository for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Trainer>, RepositoryError> {
        let trainer = sqlx::query_as::<_, Trainer>(&format!(
            "SELECT {TRAINER_COLUMNS} FROM trainers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(trainer)
    }

    async fn insert(&self, trainer: NewTrainer) -> Result<Trainer, RepositoryError> {
        let stored = sqlx::query_as::<_, Trainer>(&format!(
            "INSERT INTO trainers (id, name, email, specialization, experience_years, contact_number, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {TRAINER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&trainer.name)
        .bind(&trainer.email)
        .bind(&trainer.specialization)
        .bind(trainer.experience_years)
        .bind(&trainer.contact_number)
        .bind(&trainer.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;

        Ok(stored)
    }
}

#[async_trait]
impl GoalRepository for PgStore {
    async fn insert(&self, goal: NewFitnessGoal) -> Result<FitnessGoal, RepositoryError> {
        let now = Utc::now();

        let stored = sqlx::query_as::<_, FitnessGoal>(&format!(
            "INSERT INTO fitness_goals (id, goal_type, target, timeline, user_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {GOAL_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&goal.goal_type)
        .bind(goal.target)
        .bind(&goal.timeline)
        .bind(goal.user_id)
        .bind(now)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;

        Ok(stored)
    }

    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<FitnessGoal>, RepositoryError> {
        let goals = sqlx::query_as::<_, FitnessGoal>(&format!(
            "SELECT {GOAL_COLUMNS} FROM fitness_goals
             WHERE $1::uuid IS NULL OR user_id = $1
             ORDER BY seq"
        ))
        .bind(owner)
        .fetch_all(&self.db)
        .await?;

        Ok(goals)
    }

    async fn find(&self, id: Uuid, owner: Uuid) -> Result<Option<FitnessGoal>, RepositoryError> {
        let goal = sqlx::query_as::<_, FitnessGoal>(&format!(
            "SELECT {GOAL_COLUMNS} FROM fitness_goals WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.db)
        .await?;

        Ok(goal)
    }

    async fn update(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: FitnessGoalChanges,
    ) -> Result<Option<FitnessGoal>, RepositoryError> {
        let goal = sqlx::query_as::<_, FitnessGoal>(&format!(
            "UPDATE fitness_goals
             SET goal_type = COALESCE($3, goal_type),
                 target = COALESCE($4, target),
                 timeline = COALESCE($5, timeline),
                 updated_at = $6
             WHERE id = $1 AND user_id = $2
             RETURNING {GOAL_COLUMNS}"
        ))
        .bind(id)
        .bind(owner)
        .bind(changes.goal_type)
        .bind(changes.target)
        .bind(changes.timeline)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(goal)
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM fitness_goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl WorkoutPlanRepository for PgStore {
    async fn insert(&self, plan: NewWorkoutPlan) -> Result<WorkoutPlan, RepositoryError> {
        let now = Utc::now();

        let stored = sqlx::query_as::<_, WorkoutPlan>(&format!(
            "INSERT INTO workout_plans (id, plan_name, goal, duration, description, trainer_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {PLAN_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&plan.plan_name)
        .bind(&plan.goal)
        .bind(&plan.duration)
        .bind(&plan.description)
        .bind(plan.trainer_id)
        .bind(now)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;

        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<WorkoutPlan>, RepositoryError> {
        let plans = sqlx::query_as::<_, WorkoutPlan>(&format!(
            "SELECT {PLAN_COLUMNS} FROM workout_plans ORDER BY seq"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(plans)
    }

    async fn find(&self, id: Uuid, trainer: Uuid) -> Result<Option<WorkoutPlan>, RepositoryError> {
        let plan = sqlx::query_as::<_, WorkoutPlan>(&format!(
            "SELECT {PLAN_COLUMNS} FROM workout_plans WHERE id = $1 AND trainer_id = $2"
        ))
        .bind(id)
        .bind(trainer)
        .fetch_optional(&self.db)
        .await?;

        Ok(plan)
    }

    async fn update(
        &self,
        id: Uuid,
        trainer: Uuid,
        changes: WorkoutPlanChanges,
    ) -> Result<Option<WorkoutPlan>, RepositoryError> {
        let plan = sqlx::query_as::<_, WorkoutPlan>(&format!(
            "UPDATE workout_plans
             SET plan_name = COALESCE($3, plan_name),
                 goal = COALESCE($4, goal),
                 duration = COALESCE($5, duration),
                 description = COALESCE($6, description),
                 updated_at = $7
             WHERE id = $1 AND trainer_id = $2
             RETURNING {PLAN_COLUMNS}"
        ))
        .bind(id)
        .bind(trainer)
        .bind(changes.plan_name)
        .bind(changes.goal)
        .bind(changes.duration)
        .bind(changes.description)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(plan)
    }

    async fn delete(&self, id: Uuid, trainer: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM workout_plans WHERE id = $1 AND trainer_id = $2")
            .bind(id)
            .bind(trainer)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProgressRepository for PgStore {
    async fn insert(&self, entry: NewProgressEntry) -> Result<ProgressEntry, RepositoryError> {
        let stored = sqlx::query_as::<_, ProgressEntry>(&format!(
            "INSERT INTO progress_entries (id, user_id, date, weight, body_measurements, notes, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PROGRESS_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(entry.date)
        .bind(entry.weight)
        .bind(&entry.body_measurements)
        .bind(&entry.notes)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;

        Ok(stored)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let entries = sqlx::query_as::<_, ProgressEntry>(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress_entries WHERE user_id = $1 ORDER BY seq"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}

use anyhow::Result;

use crate::auth::password::hash_password;
use crate::models::{NewFitnessGoal, NewTrainer, NewUser, NewWorkoutPlan};
use crate::repository::Repositories;

pub const DEMO_USER_EMAIL: &str = "john.doe@example.com";
pub const DEMO_TRAINER_EMAIL: &str = "coach.sam@example.com";
pub const DEMO_PASSWORD: &str = "password123";

pub struct DatabaseSeeder {
    repositories: Repositories,
}

impl DatabaseSeeder {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        self.seed_user().await?;
        self.seed_trainer().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    /// Demo user and two goals, skipped when the user already exists
    async fn seed_user(&self) -> Result<()> {
        if self
            .repositories
            .users
            .find_by_email(DEMO_USER_EMAIL)
            .await?
            .is_some()
        {
            tracing::info!("Demo user already present, skipping");
            return Ok(());
        }

        let user = self
            .repositories
            .users
            .insert(NewUser {
                name: "John Doe".to_string(),
                age: Some(30),
                gender: Some("Male".to_string()),
                height: Some(180.0),
                weight: Some(75.0),
                email: DEMO_USER_EMAIL.to_string(),
                contact_number: Some("1234567890".to_string()),
                password_hash: hash_password(DEMO_PASSWORD)?,
            })
            .await?;

        let demo_goals = vec![
            ("Weight Loss", 10.0, "3 months"),
            ("Endurance", 50.0, "6 months"),
        ];

        for (goal_type, target, timeline) in demo_goals {
            self.repositories
                .goals
                .insert(NewFitnessGoal {
                    goal_type: goal_type.to_string(),
                    target,
                    timeline: timeline.to_string(),
                    user_id: user.id,
                })
                .await?;
        }

        tracing::info!("Created demo user with goals");
        Ok(())
    }

    /// Demo trainer and two plans, skipped when the trainer already exists
    async fn seed_trainer(&self) -> Result<()> {
        if self
            .repositories
            .trainers
            .find_by_email(DEMO_TRAINER_EMAIL)
            .await?
            .is_some()
        {
            tracing::info!("Demo trainer already present, skipping");
            return Ok(());
        }

        let trainer = self
            .repositories
            .trainers
            .insert(NewTrainer {
                name: "Sam Coach".to_string(),
                email: DEMO_TRAINER_EMAIL.to_string(),
                specialization: Some("Strength".to_string()),
                experience_years: Some(8),
                contact_number: None,
                password_hash: hash_password(DEMO_PASSWORD)?,
            })
            .await?;

        let demo_plans = vec![
            NewWorkoutPlan {
                plan_name: "Beginner Strength".to_string(),
                goal: "Muscle Gain".to_string(),
                duration: "8 weeks".to_string(),
                description: "Three full-body sessions per week".to_string(),
                trainer_id: trainer.id,
            },
            NewWorkoutPlan {
                plan_name: "5K Builder".to_string(),
                goal: "Endurance".to_string(),
                duration: "6 weeks".to_string(),
                description: "Run/walk intervals building to a continuous 5K".to_string(),
                trainer_id: trainer.id,
            },
        ];

        for plan in demo_plans {
            self.repositories.plans.insert(plan).await?;
        }

        tracing::info!("Created demo trainer with workout plans");
        Ok(())
    }
}

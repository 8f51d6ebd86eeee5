// Resource services: validation, owner scoping and persistence for the API

pub mod goal_service;
pub mod progress_service;
pub mod workout_plan_service;

pub use goal_service::GoalService;
pub use progress_service::ProgressService;
pub use workout_plan_service::WorkoutPlanService;

use thiserror::Error;
use uuid::Uuid;

use crate::models::ValidationError;
use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Parse a path identifier. Anything that is not a UUID cannot name a
/// stored record, so it is reported as missing rather than as bad input.
pub(crate) fn parse_id(raw: &str, resource: &'static str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::NotFound(resource))
}

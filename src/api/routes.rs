use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::goals::goal_routes;
use super::health::health_check;
use super::progress::progress_routes;
use super::workout_plans::workout_plan_routes;
use crate::auth::middleware::{cors_layer, security_headers_layer};
use crate::auth::{AuthService, JwtService};
use crate::config::AppConfig;
use crate::repository::Repositories;
use crate::services::{GoalService, ProgressService, WorkoutPlanService};

/// Assemble the application router. Each resource router carries its own
/// service as state; the auth service is shared by the middleware.
pub fn create_routes(repositories: Repositories, config: &AppConfig) -> Router {
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expires_in);
    let auth_service = AuthService::new(
        repositories.users.clone(),
        repositories.trainers.clone(),
        jwt_service,
    );

    let goal_service = GoalService::new(repositories.goals.clone(), config.scope_goal_listing);
    let plan_service = WorkoutPlanService::new(repositories.plans.clone());
    let progress_service = ProgressService::new(repositories.progress.clone());

    Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes(auth_service.clone()))
        .nest("/fitnessGoals", goal_routes(goal_service, auth_service.clone()))
        .nest(
            "/api/workoutPlans",
            workout_plan_routes(plan_service, auth_service.clone()),
        )
        .nest("/progress", progress_routes(progress_service, auth_service))
        .layer(TraceLayer::new_for_http())
        .layer(security_headers_layer())
        .layer(cors_layer())
}

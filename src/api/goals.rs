use axum::{
    extract::{Path, State},
    middleware,
    response::Json,
    routing::get,
    Extension, Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::auth::{user_auth_middleware, AuthService, UserSession};
use crate::models::{CreateFitnessGoalRequest, FitnessGoal, UpdateFitnessGoalRequest};
use crate::services::GoalService;

/// `/fitnessGoals` routes, all behind the user middleware
pub fn goal_routes(goal_service: GoalService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route(
            "/:goal_id",
            get(get_goal).patch(update_goal).delete(delete_goal),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            user_auth_middleware,
        ))
        .with_state(goal_service)
}

/// Create a goal owned by the caller
#[tracing::instrument(skip(goal_service, request))]
async fn create_goal(
    State(goal_service): State<GoalService>,
    Extension(session): Extension<UserSession>,
    WithRejection(Json(request), _): WithRejection<Json<CreateFitnessGoalRequest>, ApiError>,
) -> Result<Json<FitnessGoal>, ApiError> {
    goal_service
        .create_goal(session.account_id, request)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Failed to create fitness goal"))
}

#[tracing::instrument(skip(goal_service))]
async fn list_goals(
    State(goal_service): State<GoalService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<Vec<FitnessGoal>>, ApiError> {
    goal_service
        .list_goals(session.account_id)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Failed to fetch fitness goals"))
}

#[tracing::instrument(skip(goal_service))]
async fn get_goal(
    State(goal_service): State<GoalService>,
    Extension(session): Extension<UserSession>,
    Path(goal_id): Path<String>,
) -> Result<Json<FitnessGoal>, ApiError> {
    goal_service
        .get_goal(session.account_id, &goal_id)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Failed to fetch fitness goal"))
}

/// Partial update; absent fields keep their stored values
#[tracing::instrument(skip(goal_service, request))]
async fn update_goal(
    State(goal_service): State<GoalService>,
    Extension(session): Extension<UserSession>,
    Path(goal_id): Path<String>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateFitnessGoalRequest>, ApiError>,
) -> Result<Json<FitnessGoal>, ApiError> {
    goal_service
        .update_goal(session.account_id, &goal_id, request)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Failed to update fitness goal"))
}

#[tracing::instrument(skip(goal_service))]
async fn delete_goal(
    State(goal_service): State<GoalService>,
    Extension(session): Extension<UserSession>,
    Path(goal_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    goal_service
        .delete_goal(session.account_id, &goal_id)
        .await
        .map_err(|err| ApiError::internal(err, "Failed to delete fitness goal"))?;

    Ok(Json(json!({ "message": "Fitness goal deleted" })))
}

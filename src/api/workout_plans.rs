use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::auth::{trainer_auth_middleware, AuthService, UserSession};
use crate::models::{CreateWorkoutPlanRequest, UpdateWorkoutPlanRequest, WorkoutPlan};
use crate::services::{ServiceError, WorkoutPlanService};

/// `/api/workoutPlans` routes, all behind the trainer middleware
pub fn workout_plan_routes(plan_service: WorkoutPlanService, auth_service: AuthService) -> Router {
    Router::new()
        // Other methods on the fixed paths treat the segment as a plan id
        .route("/createPlan", post(create_plan).fallback(plan_not_found))
        .route("/workoutPlans", get(list_plans).fallback(plan_not_found))
        .route(
            "/:plan_id",
            get(get_plan).patch(update_plan).delete(delete_plan),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            trainer_auth_middleware,
        ))
        .with_state(plan_service)
}

const CREATE_FAILED: &str = "Error creating workout plan";

/// Create a plan owned by the calling trainer
#[tracing::instrument(skip(plan_service, body))]
async fn create_plan(
    State(plan_service): State<WorkoutPlanService>,
    Extension(session): Extension<UserSession>,
    body: Result<Json<CreateWorkoutPlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutPlan>), ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(StatusCode::BAD_REQUEST, CREATE_FAILED).with_message(rejection.body_text())
    })?;

    match plan_service.create_plan(session.account_id, request).await {
        Ok(plan) => Ok((StatusCode::CREATED, Json(plan))),
        // Every creation failure is reported as a bad request.
        Err(ServiceError::Validation(err)) => {
            Err(ApiError::new(StatusCode::BAD_REQUEST, CREATE_FAILED).with_message(err.to_string()))
        }
        Err(err) => Err(ApiError::from_service(err, StatusCode::BAD_REQUEST, CREATE_FAILED)),
    }
}

#[tracing::instrument(skip(plan_service))]
async fn list_plans(
    State(plan_service): State<WorkoutPlanService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<Vec<WorkoutPlan>>, ApiError> {
    plan_service
        .list_plans()
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Error fetching workout plans"))
}

#[tracing::instrument(skip(plan_service))]
async fn get_plan(
    State(plan_service): State<WorkoutPlanService>,
    Extension(session): Extension<UserSession>,
    Path(plan_id): Path<String>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    plan_service
        .get_plan(session.account_id, &plan_id)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Error fetching workout plan"))
}

#[tracing::instrument(skip(plan_service, request))]
async fn update_plan(
    State(plan_service): State<WorkoutPlanService>,
    Extension(session): Extension<UserSession>,
    Path(plan_id): Path<String>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateWorkoutPlanRequest>, ApiError>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    plan_service
        .update_plan(session.account_id, &plan_id, request)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Error updating workout plan"))
}

#[tracing::instrument(skip(plan_service))]
async fn delete_plan(
    State(plan_service): State<WorkoutPlanService>,
    Extension(session): Extension<UserSession>,
    Path(plan_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    plan_service
        .delete_plan(session.account_id, &plan_id)
        .await
        .map_err(|err| ApiError::internal(err, "Error deleting workout plan"))?;

    Ok(Json(json!({ "message": "Workout plan deleted" })))
}

async fn plan_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Workout plan not found")
}

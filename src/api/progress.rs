use axum::{
    extract::State, http::StatusCode, middleware, response::Json, routing::get, Extension, Router,
};
use axum_extra::extract::WithRejection;

use crate::api::error::ApiError;
use crate::auth::{user_auth_middleware, AuthService, UserSession};
use crate::models::{CreateProgressEntryRequest, ProgressEntry};
use crate::services::ProgressService;

/// `/progress` routes, behind the user middleware
pub fn progress_routes(progress_service: ProgressService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", get(list_progress).post(track_progress))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            user_auth_middleware,
        ))
        .with_state(progress_service)
}

#[tracing::instrument(skip(progress_service, request))]
async fn track_progress(
    State(progress_service): State<ProgressService>,
    Extension(session): Extension<UserSession>,
    WithRejection(Json(request), _): WithRejection<Json<CreateProgressEntryRequest>, ApiError>,
) -> Result<(StatusCode, Json<ProgressEntry>), ApiError> {
    let entry = progress_service
        .track(session.account_id, request)
        .await
        .map_err(|err| ApiError::internal(err, "Failed to track progress"))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// The caller's progress log, oldest first
#[tracing::instrument(skip(progress_service))]
async fn list_progress(
    State(progress_service): State<ProgressService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<Vec<ProgressEntry>>, ApiError> {
    progress_service
        .history(session.account_id)
        .await
        .map(Json)
        .map_err(|err| ApiError::internal(err, "Failed to fetch progress"))
}

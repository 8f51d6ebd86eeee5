use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use axum_extra::extract::WithRejection;

use crate::auth::{
    AuthError, AuthService, LoginRequest, LoginResponse, MessageResponse, SignupRequest,
    TrainerSignupRequest,
};

/// Public signup and login routes for users and trainers
pub fn auth_routes(auth_service: AuthService) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/trainers/signup", post(trainer_signup))
        .route("/trainers/login", post(trainer_login))
        .with_state(auth_service)
}

/// Register a new user
#[tracing::instrument(skip(auth_service, request))]
async fn signup(
    State(auth_service): State<AuthService>,
    WithRejection(Json(request), _): WithRejection<Json<SignupRequest>, AuthError>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthError> {
    let response = auth_service.signup(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login user
#[tracing::instrument(skip(auth_service, request))]
async fn login(
    State(auth_service): State<AuthService>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequest>, AuthError>,
) -> Result<(StatusCode, Json<LoginResponse>), AuthError> {
    let response = auth_service.login(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Register a new trainer
#[tracing::instrument(skip(auth_service, request))]
async fn trainer_signup(
    State(auth_service): State<AuthService>,
    WithRejection(Json(request), _): WithRejection<Json<TrainerSignupRequest>, AuthError>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthError> {
    let response = auth_service.signup_trainer(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login trainer
#[tracing::instrument(skip(auth_service, request))]
async fn trainer_login(
    State(auth_service): State<AuthService>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequest>, AuthError>,
) -> Result<(StatusCode, Json<LoginResponse>), AuthError> {
    let response = auth_service.login_trainer(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

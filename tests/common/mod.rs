// Shared helpers for the API integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use fitness_tracker::api::create_routes;
use fitness_tracker::auth::{JwtService, Role};
use fitness_tracker::config::AppConfig;
use fitness_tracker::repository::Repositories;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

pub fn test_config(scope_goal_listing: bool) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "SCOPE_GOAL_LISTING" => Some(scope_goal_listing.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Router over a fresh in-memory store
pub fn create_test_app() -> Router {
    create_routes(Repositories::in_memory(), &test_config(false))
}

pub fn create_app_with(repositories: Repositories, scope_goal_listing: bool) -> Router {
    create_routes(repositories, &test_config(scope_goal_listing))
}

/// Token for an arbitrary identity, signed with the test secret
pub fn token_for(account_id: Uuid, role: Role) -> String {
    JwtService::new(TEST_JWT_SECRET, chrono::Duration::hours(1))
        .create_token(account_id, role)
        .unwrap()
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

pub fn signup_payload(email: &str) -> Value {
    json!({
        "name": "John Doe",
        "age": 30,
        "gender": "Male",
        "height": 180,
        "weight": 75,
        "email": email,
        "contactNumber": "1234567890",
        "password": "password123"
    })
}

/// Sign up and log in a user through the API, returning the bearer token
pub async fn user_token(app: &Router, email: &str) -> String {
    let (status, _) = send(
        app,
        json_request(Method::POST, "/signup", None, Some(signup_payload(email))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    login(app, "/login", email, "password123").await
}

/// Sign up and log in a trainer through the API, returning the bearer token
pub async fn trainer_token(app: &Router, email: &str) -> String {
    let payload = json!({
        "name": "Sam Coach",
        "email": email,
        "specialization": "Strength",
        "experienceYears": 8,
        "password": "trainerpass"
    });
    let (status, _) = send(
        app,
        json_request(Method::POST, "/trainers/signup", None, Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    login(app, "/trainers/login", email, "trainerpass").await
}

async fn login(app: &Router, uri: &str, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            uri,
            None,
            Some(json!({ "email": email, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["token"].as_str().unwrap().to_string()
}

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use fitness_tracker::auth::{JwtService, Role};
use fitness_tracker::repository::Repositories;

use common::{
    create_app_with, create_test_app, json_request, send, token_for, user_token, TEST_JWT_SECRET,
};

fn weight_loss_goal() -> Value {
    json!({ "goalType": "Weight Loss", "target": 10, "timeline": "3 months" })
}

#[tokio::test]
async fn test_create_fitness_goal() {
    let app = create_test_app();
    let user_id = Uuid::new_v4();
    let token = token_for(user_id, Role::User);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/fitnessGoals", Some(&token), Some(weight_loss_goal())),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goalType"], "Weight Loss");
    assert_eq!(body["target"], 10.0);
    assert_eq!(body["timeline"], "3 months");
    assert_eq!(body["userId"], user_id.to_string());
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_owner_comes_from_token_not_body() {
    let app = create_test_app();
    let user_id = Uuid::new_v4();
    let token = token_for(user_id, Role::User);

    let mut payload = weight_loss_goal();
    payload["userId"] = json!(Uuid::new_v4().to_string());

    let (_, body) = send(
        &app,
        json_request(Method::POST, "/fitnessGoals", Some(&token), Some(payload)),
    )
    .await;

    assert_eq!(body["userId"], user_id.to_string());
}

#[tokio::test]
async fn test_create_goal_validation() {
    let app = create_test_app();
    let token = token_for(Uuid::new_v4(), Role::User);

    for payload in [
        json!({ "target": 10, "timeline": "3 months" }),
        json!({ "goalType": "Weight Loss", "timeline": "3 months" }),
        json!({ "goalType": "Weight Loss", "target": -1, "timeline": "3 months" }),
        json!({ "goalType": "Weight Loss", "target": "ten", "timeline": "3 months" }),
    ] {
        let (status, _) = send(
            &app,
            json_request(Method::POST, "/fitnessGoals", Some(&token), Some(payload.clone())),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
    }
}

#[tokio::test]
async fn test_get_unknown_goal_is_not_found() {
    let app = create_test_app();
    let token = token_for(Uuid::new_v4(), Role::User);

    for id in ["60b6e9e8b6a12345678e9f99".to_string(), Uuid::new_v4().to_string()] {
        let (status, body) = send(
            &app,
            json_request(Method::GET, &format!("/fitnessGoals/{}", id), Some(&token), None),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Fitness goal not found" }));
    }
}

#[tokio::test]
async fn test_update_and_delete_unknown_goal_are_not_found() {
    let app = create_test_app();
    let token = token_for(Uuid::new_v4(), Role::User);
    let uri = "/fitnessGoals/60b6e9e8b6a12345678e9f99";

    let (status, body) = send(
        &app,
        json_request(Method::PATCH, uri, Some(&token), Some(json!({ "target": 5 }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Fitness goal not found" }));

    let (status, body) = send(&app, json_request(Method::DELETE, uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Fitness goal not found" }));
}

#[tokio::test]
async fn test_goal_round_trip_and_partial_update() {
    let app = create_test_app();
    let token = user_token(&app, "john.doe@example.com").await;

    let (_, created) = send(
        &app,
        json_request(
            Method::POST,
            "/fitnessGoals",
            Some(&token),
            Some(json!({ "goalType": "Endurance", "target": 50, "timeline": "6 months" })),
        ),
    )
    .await;
    let uri = format!("/fitnessGoals/{}", created["id"].as_str().unwrap());

    let (status, fetched) = send(&app, json_request(Method::GET, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["goalType"], "Endurance");
    assert_eq!(fetched["target"], 50.0);
    assert_eq!(fetched["timeline"], "6 months");

    let (status, updated) = send(
        &app,
        json_request(Method::PATCH, &uri, Some(&token), Some(json!({ "target": 60 }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["target"], 60.0);
    assert_eq!(updated["goalType"], "Endurance");
    assert_eq!(updated["timeline"], "6 months");
    assert_eq!(updated["userId"], created["userId"]);

    let (status, body) = send(&app, json_request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Fitness goal deleted" }));

    let (status, _) = send(&app, json_request(Method::GET, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_users_goal_is_not_found() {
    let app = create_test_app();
    let owner = token_for(Uuid::new_v4(), Role::User);
    let stranger = token_for(Uuid::new_v4(), Role::User);

    let (_, created) = send(
        &app,
        json_request(Method::POST, "/fitnessGoals", Some(&owner), Some(weight_loss_goal())),
    )
    .await;
    let uri = format!("/fitnessGoals/{}", created["id"].as_str().unwrap());

    for method in [Method::GET, Method::DELETE] {
        let (status, _) = send(&app, json_request(method, &uri, Some(&stranger), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = send(
        &app,
        json_request(Method::PATCH, &uri, Some(&stranger), Some(json!({ "target": 1 }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, json_request(Method::GET, &uri, Some(&owner), None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_is_unscoped_by_default() {
    let app = create_test_app();
    let alice = token_for(Uuid::new_v4(), Role::User);
    let bob = token_for(Uuid::new_v4(), Role::User);

    send(
        &app,
        json_request(Method::POST, "/fitnessGoals", Some(&alice), Some(weight_loss_goal())),
    )
    .await;
    send(
        &app,
        json_request(
            Method::POST,
            "/fitnessGoals",
            Some(&bob),
            Some(json!({ "goalType": "Flexibility", "target": 30, "timeline": "3 months" })),
        ),
    )
    .await;

    let (status, body) = send(&app, json_request(Method::GET, "/fitnessGoals", Some(&alice), None)).await;

    assert_eq!(status, StatusCode::OK);
    let goal_types: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|goal| goal["goalType"].as_str().unwrap())
        .collect();
    assert_eq!(goal_types, vec!["Weight Loss", "Flexibility"]);
}

#[tokio::test]
async fn test_listing_can_be_scoped_to_caller() {
    let app = create_app_with(Repositories::in_memory(), true);
    let alice_id = Uuid::new_v4();
    let alice = token_for(alice_id, Role::User);
    let bob = token_for(Uuid::new_v4(), Role::User);

    for token in [&alice, &bob] {
        send(
            &app,
            json_request(Method::POST, "/fitnessGoals", Some(token), Some(weight_loss_goal())),
        )
        .await;
    }

    let (_, body) = send(&app, json_request(Method::GET, "/fitnessGoals", Some(&alice), None)).await;

    let goals = body.as_array().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["userId"], alice_id.to_string());
}

#[tokio::test]
async fn test_goals_require_user_token() {
    let app = create_test_app();
    let trainer = token_for(Uuid::new_v4(), Role::Trainer);

    let (status, body) = send(&app, json_request(Method::GET, "/fitnessGoals", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/fitnessGoals", Some(&trainer), Some(weight_loss_goal())),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = create_test_app();
    let expired = JwtService::new(TEST_JWT_SECRET, chrono::Duration::hours(-2))
        .create_token(Uuid::new_v4(), Role::User)
        .unwrap();

    let (status, body) = send(
        &app,
        json_request(Method::GET, "/fitnessGoals", Some(&expired), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized", "message": "Token expired" }));
}

use anyhow::Result;
use fitness_tracker_cli::api::{ApiClient, ApiError, RetryConfig};
use fitness_tracker_cli::config::Config;
use fitness_tracker_cli::models::{GoalUpdate, NewWorkoutPlan, SignupPayload};

fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config
}

#[tokio::test]
async fn test_signup_sends_camel_case_payload() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/signup")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "John Doe",
            "email": "john.doe@example.com",
            "password": "password123",
            "contactNumber": "555-0100"
        })))
        .with_status(201)
        .with_body(r#"{"message":"User registered successfully"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&config_for(&server.url()))?;
    let payload = SignupPayload {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        password: "password123".to_string(),
        contact_number: Some("555-0100".to_string()),
        ..Default::default()
    };

    let response = client.signup(&payload).await?;

    mock.assert_async().await;
    assert_eq!(response.message, "User registered successfully");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_signup_is_conflict() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/signup")
        .with_status(409)
        .with_body(r#"{"error":"Email already exists"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&config_for(&server.url()))?;
    let err = client
        .signup(&SignupPayload {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password: "password123".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn test_update_goal_sends_only_changed_fields() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/fitnessGoals/g1")
        .match_body(mockito::Matcher::Json(serde_json::json!({ "target": 5.0 })))
        .with_status(200)
        .with_body(
            r#"{"id":"g1","goalType":"Weight Loss","target":5,"timeline":"3 months","userId":"u1"}"#,
        )
        .create_async()
        .await;

    let mut config = config_for(&server.url());
    config.set_token("user-token".to_string());
    let client = ApiClient::new(&config)?;

    let update = GoalUpdate {
        target: Some(5.0),
        ..Default::default()
    };
    let goal = client.update_goal("g1", &update).await?;

    mock.assert_async().await;
    assert_eq!(goal.goal_type, "Weight Loss");
    assert_eq!(goal.target, 5.0);
    Ok(())
}

#[tokio::test]
async fn test_create_plan_failure_is_bad_request() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/workoutPlans/createPlan")
        .match_header("authorization", "Bearer trainer-token")
        .with_status(400)
        .with_body(r#"{"error":"Error creating workout plan"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut config = config_for(&server.url());
    config.set_trainer_token("trainer-token".to_string());
    let client = ApiClient::new(&config)?;

    let err = client
        .create_plan(&NewWorkoutPlan {
            plan_name: "Strength Builder".to_string(),
            goal: "Muscle Gain".to_string(),
            duration: "8 weeks".to_string(),
            description: String::new(),
        })
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::BadRequest(msg)) if msg == "Error creating workout plan"
    ));
    Ok(())
}

#[tokio::test]
async fn test_reads_retry_network_errors() -> Result<()> {
    let mut config = config_for("http://127.0.0.1:1");
    config.set_token("user-token".to_string());

    let retry = RetryConfig {
        max_attempts: 2,
        initial_delay_ms: 1,
        ..Default::default()
    };
    let client = ApiClient::with_retry_config(&config, retry)?;

    let err = client.list_progress().await.unwrap_err();
    assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::NetworkError(_))));
    Ok(())
}

#[test]
fn test_config_authentication_status() {
    let mut config = Config::default();

    assert!(!config.is_authenticated());

    config.set_token("user".to_string());
    assert!(config.is_authenticated());
    assert!(!config.is_trainer_authenticated());

    config.clear_tokens();
    assert!(!config.is_authenticated());
}

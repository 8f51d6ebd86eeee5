use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::models::{
    FitnessGoal, GoalUpdate, LoginPayload, LoginResponse, MessageResponse, NewGoal,
    NewWorkoutPlan, ProgressEntry, ProgressForm, SignupPayload, WorkoutPlan,
};

mod error;
mod retry;

pub use error::ApiError;
pub use retry::RetryConfig;

/// API client for communicating with the fitness tracker backend
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
    trainer_token: String,
    retry_config: RetryConfig,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_retry_config(config, RetryConfig::default())
    }

    /// Create a new API client with custom retry configuration
    pub fn with_retry_config(config: &Config, retry_config: RetryConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: config.auth.token.clone(),
            trainer_token: config.auth.trainer_token.clone(),
            retry_config,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).context("Invalid API base URL")
    }

    /// URL of one record; the id is percent-encoded as a single path segment
    fn item_url(&self, collection: &str, id: &str) -> Result<Url> {
        let mut url = self.url(collection)?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Invalid API base URL"))?
            .push(id);
        Ok(url)
    }

    fn user_token(&self) -> Result<&str> {
        if self.token.is_empty() {
            return Err(ApiError::NotLoggedIn.into());
        }
        Ok(&self.token)
    }

    fn trainer_token(&self) -> Result<&str> {
        if self.trainer_token.is_empty() {
            return Err(ApiError::TrainerNotLoggedIn.into());
        }
        Ok(&self.trainer_token)
    }

    /// Send a request and decode a JSON body from a success response
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, error_text).into());
        }

        let body = response
            .json()
            .await
            .context("Failed to parse API response")?;

        Ok(body)
    }

    /// GET with retries on transport failures
    async fn get_json<T: DeserializeOwned>(&self, url: Url, token: &str) -> Result<T> {
        let url = &url;

        self.retry_config
            .execute(move || self.send_json(self.client.get(url.clone()).bearer_auth(token)))
            .await
    }

    /// Register a new user account
    pub async fn signup(&self, payload: &SignupPayload) -> Result<MessageResponse> {
        tracing::debug!("Registering {}", payload.email);

        self.send_json(self.client.post(self.url("/signup")?).json(payload))
            .await
    }

    /// Log in as a user
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.login_at("/login", email, password).await
    }

    /// Log in as a trainer
    pub async fn trainer_login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.login_at("/trainers/login", email, password).await
    }

    async fn login_at(&self, path: &str, email: &str, password: &str) -> Result<LoginResponse> {
        tracing::debug!("Logging in as {}", email);

        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .send_json(self.client.post(self.url(path)?).json(&payload))
            .await?;

        tracing::info!("Successfully logged in as {}", email);
        Ok(response)
    }

    pub async fn list_goals(&self) -> Result<Vec<FitnessGoal>> {
        let token = self.user_token()?;
        self.get_json(self.url("/fitnessGoals")?, token).await
    }

    pub async fn create_goal(&self, goal: &NewGoal) -> Result<FitnessGoal> {
        let token = self.user_token()?;

        self.send_json(
            self.client
                .post(self.url("/fitnessGoals")?)
                .bearer_auth(token)
                .json(goal),
        )
        .await
    }

    pub async fn get_goal(&self, id: &str) -> Result<FitnessGoal> {
        let token = self.user_token()?;
        self.get_json(self.item_url("/fitnessGoals", id)?, token).await
    }

    pub async fn update_goal(&self, id: &str, update: &GoalUpdate) -> Result<FitnessGoal> {
        let token = self.user_token()?;

        self.send_json(
            self.client
                .patch(self.item_url("/fitnessGoals", id)?)
                .bearer_auth(token)
                .json(update),
        )
        .await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<MessageResponse> {
        let token = self.user_token()?;

        self.send_json(
            self.client
                .delete(self.item_url("/fitnessGoals", id)?)
                .bearer_auth(token),
        )
        .await
    }

    pub async fn list_plans(&self) -> Result<Vec<WorkoutPlan>> {
        let token = self.trainer_token()?;
        self.get_json(self.url("/api/workoutPlans/workoutPlans")?, token).await
    }

    pub async fn create_plan(&self, plan: &NewWorkoutPlan) -> Result<WorkoutPlan> {
        let token = self.trainer_token()?;

        self.send_json(
            self.client
                .post(self.url("/api/workoutPlans/createPlan")?)
                .bearer_auth(token)
                .json(plan),
        )
        .await
    }

    pub async fn get_plan(&self, id: &str) -> Result<WorkoutPlan> {
        let token = self.trainer_token()?;
        self.get_json(self.item_url("/api/workoutPlans", id)?, token).await
    }

    pub async fn delete_plan(&self, id: &str) -> Result<MessageResponse> {
        let token = self.trainer_token()?;

        self.send_json(
            self.client
                .delete(self.item_url("/api/workoutPlans", id)?)
                .bearer_auth(token),
        )
        .await
    }

    pub async fn track_progress(&self, form: &ProgressForm) -> Result<ProgressEntry> {
        let token = self.user_token()?;

        self.send_json(
            self.client
                .post(self.url("/progress")?)
                .bearer_auth(token)
                .json(form),
        )
        .await
    }

    pub async fn list_progress(&self) -> Result<Vec<ProgressEntry>> {
        let token = self.user_token()?;
        self.get_json(self.url("/progress")?, token).await
    }
}

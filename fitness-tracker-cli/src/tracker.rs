// Create-then-refresh state machine behind `fitness progress track`

use anyhow::Result;

use crate::api::{ApiClient, ApiError};
use crate::models::{ProgressEntry, ProgressForm, ProgressRow};

pub const TRACK_FAILED: &str = "Failed to track progress";
pub const GENERIC_FAILURE: &str = "An error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Submitting,
}

pub struct ProgressTracker {
    client: ApiClient,
    state: TrackerState,
    entries: Vec<ProgressEntry>,
    error: Option<String>,
}

impl ProgressTracker {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: TrackerState::Idle,
            entries: Vec::new(),
            error: None,
        }
    }

    /// Initial read of the progress log
    pub async fn load(&mut self) -> Result<()> {
        self.entries = self.client.list_progress().await?;
        Ok(())
    }

    /// Post the form, then re-read the log. Either step failing leaves the
    /// tracker idle with one message; the two failures look the same.
    pub async fn submit(&mut self, form: &ProgressForm) {
        self.state = TrackerState::Submitting;
        self.error = None;

        let outcome = match self.client.track_progress(form).await {
            Ok(_) => self.client.list_progress().await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                tracing::warn!("Progress submission failed: {:#}", e);
                self.error = Some(failure_message(&e).to_string());
            }
        }

        self.state = TrackerState::Idle;
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn rows(&self) -> Vec<ProgressRow> {
        self.entries.iter().map(ProgressRow::from).collect()
    }
}

/// An HTTP error response is a tracking failure; anything else is generic
fn failure_message(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<ApiError>() {
        Some(api_error) if !api_error.is_transport() => match api_error {
            ApiError::NotLoggedIn | ApiError::TrainerNotLoggedIn => GENERIC_FAILURE,
            _ => TRACK_FAILED,
        },
        _ => GENERIC_FAILURE,
    }
}

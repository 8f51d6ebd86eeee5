use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;

use super::ApiError;

/// Retry configuration with exponential backoff. Only transport failures
/// are retried; an HTTP error response is final.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_factor: 2.0,
        }
    }
}

impl RetryConfig {
    /// Never retry
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Execute a function with retries and exponential backoff
    pub async fn execute<F, Fut, T>(&self, mut func: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        let mut delay_ms = self.initial_delay_ms;

        loop {
            match func().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;

                    if !is_retryable(&e) {
                        return Err(e);
                    }

                    if attempt >= self.max_attempts {
                        tracing::warn!("Giving up after {} attempts", attempt);
                        return Err(e);
                    }

                    tracing::debug!(
                        "Attempt {} failed, retrying in {}ms: {}",
                        attempt,
                        delay_ms,
                        e
                    );

                    sleep(Duration::from_millis(delay_ms)).await;

                    // Exponential backoff with cap
                    delay_ms = ((delay_ms as f64 * self.backoff_factor) as u64).min(self.max_delay_ms);
                }
            }
        }
    }
}

fn is_retryable(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<ApiError>()
        .map_or(false, ApiError::is_transport)
}

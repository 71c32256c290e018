use crate::error::ApiError;
use backoff::{ExponentialBackoff, backoff::Backoff};
use std::future::Future;
use std::time::Duration;

/// Retry configuration for API operations
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial retry delay
    pub initial_delay: Duration,
    /// Maximum retry delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Create a config for aggressive retry (longer delays, more attempts)
    pub fn aggressive() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(120),
            multiplier: 2.5,
        }
    }

    /// Create a config for quick retry (shorter delays, fewer attempts)
    pub fn quick() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(10),
            multiplier: 1.5,
        }
    }
}

/// Retry executor driven by the classified error's retryability.
///
/// Offered to callers that want a retry affordance; no service retries
/// implicitly.
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Execute an async operation with retry logic
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut backoff = ExponentialBackoff {
            initial_interval: self.config.initial_delay,
            max_interval: self.config.max_delay,
            multiplier: self.config.multiplier,
            max_elapsed_time: None,
            ..Default::default()
        };

        let mut attempt = 0;

        loop {
            attempt += 1;

            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if attempt >= self.config.max_retries || !error.is_retryable() {
                        return Err(error);
                    }

                    if let Some(delay) = backoff.next_backoff() {
                        log::debug!(
                            "Retrying {:?} operation after {:?} (attempt {})",
                            error.kind,
                            delay,
                            attempt
                        );
                        tokio::time::sleep(delay).await;
                    } else {
                        log::warn!(
                            "Max retry attempts reached ({}), giving up",
                            self.config.max_retries
                        );
                        return Err(error);
                    }
                }
            }
        }
    }
}

/// Convenience function for quick retry operations
pub async fn with_retry<F, Fut, T>(operation: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let executor = RetryExecutor::new(RetryConfig::default());
    executor.execute(operation).await
}

//! Retry-with-backoff combinator, applied to the idempotent read calls.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiClientError;

/// Bounded exponential backoff: up to `attempts` retries after the initial
/// call, starting at `base_delay` and doubling each time.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 2,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Run `call`, retrying only while [`ApiClientError::is_transient`] holds
/// and attempts remain. Non-transient failures propagate immediately.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut call: F) -> Result<T, ApiClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiClientError>>,
{
    let mut remaining = policy.attempts;
    let mut delay = policy.base_delay;

    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(err) if remaining > 0 && err.is_transient() => {
                tracing::debug!(error = %err, remaining, "transient server error, retrying");
                tokio::time::sleep(delay).await;
                delay *= 2;
                remaining -= 1;
            }
            Err(err) => return Err(err),
        }
    }
}

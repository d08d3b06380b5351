//! Counter increments with bounded retry on transient store failures.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::store::{CounterStore, StoreError};

/// Retry policy for transient store failures.
///
/// Fixed delay, no jitter, no backoff: the store either comes back within a
/// couple of seconds or the request fails.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total number of increment attempts, including the first.
    pub attempts: u32,
    /// Fixed pause between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_millis(500),
        }
    }
}

/// Service wrapping counter increments with the retry policy.
///
/// Holds no counter state: every call goes to the store, and concurrent
/// correctness rests on the store's atomic increment.
pub struct CounterService {
    store: Arc<dyn CounterStore>,
    policy: RetryPolicy,
}

impl CounterService {
    /// Creates a new counter service over the given store.
    pub fn new(store: Arc<dyn CounterStore>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// Increments `key` and returns the post-increment value.
    ///
    /// # Retry Behavior
    ///
    /// Connectivity failures are retried up to the policy's attempt budget
    /// with a fixed pause between attempts; the budget-exhausting failure is
    /// returned as-is. An all-fail run makes exactly `attempts` store calls
    /// and sleeps `attempts - 1` times.
    ///
    /// Protocol-class failures are returned immediately without retry: a
    /// malformed reply or a key holding the wrong type will not heal on the
    /// next attempt.
    ///
    /// # Errors
    ///
    /// Returns the last [`StoreError::Connection`] once the budget is
    /// exhausted, or the first [`StoreError::Protocol`] encountered.
    pub async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        let attempts = self.policy.attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.store.incr(key).await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(key, attempt, "increment succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if err.is_retryable() && attempt < attempts => {
                    warn!(
                        key,
                        attempt,
                        max_attempts = attempts,
                        error = %err,
                        "increment failed, retrying"
                    );
                    tokio::time::sleep(self.policy.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Checks if the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
